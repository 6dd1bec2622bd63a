use clap::{Args, Parser, Subcommand};
use fbgraph::config::conf_path;
use fbgraph::{Config, GraphClient};

#[derive(Parser)]
#[command(version = "0.1", author = "Hajime Fukuda <hajime.fukuda@me.com>")]
struct Opts {
    /// Credentials file, defaults to ~/.fbgraph.json
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Print the OAuth dialog URL to send the user to
    Url,
    /// Print profile fields of the authenticated user
    Me(MeCommand),
}

#[derive(Args)]
struct MeCommand {
    /// Authorization code received on the callback URL, exchanged before the query
    #[arg(long)]
    code: Option<String>,
    /// Token obtained earlier, used when no code is given
    #[arg(long, env = "FB_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,
    #[arg(required = true)]
    fields: Vec<String>,
}

async fn me(command: MeCommand, client: &GraphClient) -> Result<(), Box<dyn std::error::Error>> {
    let MeCommand {
        code,
        access_token,
        fields,
    } = command;

    if let Some(code) = code {
        client.exchange_token(&code).await?;
    } else if let Some(token) = access_token {
        client.set_access_token(token).await;
    }

    let profile = client.query(&fields).await?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let opts = Opts::parse();
    let path = match opts.config {
        Some(path) => path,
        None => conf_path()?,
    };
    let client = GraphClient::new(Config::load(&path).await?)?;

    match opts.subcmd {
        SubCommand::Url => {
            println!("{}", client.authorization_url());
        }
        SubCommand::Me(command) => {
            me(command, &client).await?;
        }
    }

    Ok(())
}
