fn main() -> anyhow::Result<()> {
    ini2c_cli::run()
}
