use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use client_core::{PlateDashboard, ResourceClient};
use shared::domain::{PlateDraft, PlateId};

mod config;

use config::resolve_server_url;

#[derive(Parser, Debug)]
#[command(about = "Terminal frontend for the plate dashboard")]
struct Args {
    /// Base URL of the plate resource API. Falls back to PLATE_SERVER_URL,
    /// then dashboard.toml, then the development default.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every plate on the menu.
    List,
    /// Create a plate; new plates start out available.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        image: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        description: String,
    },
    /// Rewrite a plate's fields, keeping its availability flag.
    Edit {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        image: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        description: String,
    },
    /// Delete a plate by id.
    Remove { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let server_url = resolve_server_url(args.server_url);
    let dashboard = PlateDashboard::new(ResourceClient::new(server_url));

    match args.command {
        Command::List => {
            let plates = dashboard.load_plates().await?;
            if plates.is_empty() {
                println!("No plates yet.");
            }
            for plate in plates {
                let availability = if plate.available { "available" } else { "unavailable" };
                println!("#{} {} — R$ {} ({availability})", plate.id.0, plate.name, plate.price);
                println!("    {}", plate.description);
            }
        }
        Command::Add {
            name,
            image,
            price,
            description,
        } => {
            dashboard.open_add_dialog().await;
            let created = dashboard
                .create_plate(PlateDraft {
                    name,
                    image,
                    price,
                    description,
                })
                .await?;
            println!("Created plate #{} ({})", created.id.0, created.name);
        }
        Command::Edit {
            id,
            name,
            image,
            price,
            description,
        } => {
            dashboard.load_plates().await?;
            let target = dashboard
                .plates()
                .await
                .into_iter()
                .find(|plate| plate.id == PlateId(id))
                .ok_or_else(|| anyhow!("no plate with id {id}"))?;

            dashboard.open_edit_dialog(target).await;
            let updated = dashboard
                .update_plate(PlateDraft {
                    name,
                    image,
                    price,
                    description,
                })
                .await?;
            println!("Updated plate #{} ({})", updated.id.0, updated.name);
        }
        Command::Remove { id } => {
            dashboard.remove_plate(PlateId(id)).await?;
            println!("Removed plate #{id}");
        }
    }

    Ok(())
}
