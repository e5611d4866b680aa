mod config;
mod error;
mod export;
mod library;
mod report;
mod runtime;

#[cfg(test)]
mod testing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    runtime::run()?;
    Ok(())
}
