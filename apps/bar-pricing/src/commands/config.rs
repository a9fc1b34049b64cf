use bar_config::Config;

pub fn show(config: &Config) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&config.redacted())?);
    Ok(())
}
