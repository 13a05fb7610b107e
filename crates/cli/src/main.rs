fn main() -> Result<(), Box<dyn std::error::Error>> {
    ideinfo_cli::run()
}
