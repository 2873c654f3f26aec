mod arrow;
mod card;
mod config;
mod deck;
mod diagram;
mod domain;
mod generate;
mod render;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = config::DeckConfig::load();
    let outputs = generate::run(&config)?;

    println!("Created participant deck: {}", outputs.participant.display());
    println!("Created trainer deck: {}", outputs.trainer.display());
    println!("Updated legacy deck: {}", outputs.legacy.display());
    println!("Assets directory: {}", outputs.assets.display());
    Ok(())
}
