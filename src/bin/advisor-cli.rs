use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "advisor-cli")]
#[command(about = "Query a running traffic advisor service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8888")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the service for a recommendation
    Recommend {
        #[arg(long, allow_negative_numbers = true)]
        north: i64,
        #[arg(long, allow_negative_numbers = true)]
        east: i64,
        #[arg(long, allow_negative_numbers = true)]
        south: i64,
        #[arg(long, allow_negative_numbers = true)]
        west: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Recommend {
            north,
            east,
            south,
            west,
        } => {
            let res = client
                .get(format!("{}/", cli.url.trim_end_matches('/')))
                .query(&[("north", north), ("east", east), ("south", south), ("west", west)])
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: advisor returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    match serde_json::from_str::<String>(&text) {
        Ok(message) => println!("{}", message),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
