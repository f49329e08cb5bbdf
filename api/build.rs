fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Supply a protoc binary when one is not present on the build host.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            std::env::set_var("PROTOC", protoc);
        }
    }
    tonic_build::compile_protos("proto/auth.proto")?;
    Ok(())
}
