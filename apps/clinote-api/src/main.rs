use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = clinote_api::Args::parse();

	clinote_api::run(args).await
}
