use ideinfo_ingest::wire::TargetIdeInfo;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schemars::schema_for!(TargetIdeInfo);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
