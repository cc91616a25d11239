use userdb::{User, UserUpdate, Dataset,
    backend::{UserStore, JsonStore}};

use std::path::PathBuf;
use anyhow::{anyhow, Context};
use colored::Colorize;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
   /// Path to the data file to operate on
   #[clap(value_parser)]
    path: PathBuf,

   /// Action to perform
   #[clap(subcommand)]
   action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// List all users
    List,
    /// Add a new user
    Add(UserArgs),
    /// Overwrite name and email of an existing user
    Update(UserArgs),
    /// Remove a user
    Remove(Remove)
}

#[derive(Args, Debug)]
struct UserArgs {
    /// Identifier of the user
    #[clap(short, long, value_parser)]
    id: String,

    #[clap(short, long, value_parser)]
    name: String,

    #[clap(short, long, value_parser)]
    email: String
}

impl UserArgs {
    fn to_user(&self) -> User {
        User::new(&self.id, &self.name, &self.email)
    }

    fn to_update(&self) -> UserUpdate {
        UserUpdate {
            id: Some(Value::from(self.id.as_str())),
            name: Some(Value::from(self.name.as_str())),
            email: Some(Value::from(self.email.as_str()))
        }
    }
}

#[derive(Args, Debug)]
struct Remove {
    /// Identifier of the user to remove
    #[clap(value_parser)]
    id: String
}

fn print_users(dataset: &Dataset) {
    if dataset.users.is_empty() {
        println!("{}", "no users".dimmed());
    }
    for user in &dataset.users {
        println!("{}", user.to_string().green());
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();

    let store = JsonStore::open(&args.path);
    let mut dataset = store.load()
        .with_context(|| "cannot use data file")?;

    match args.action {
        Subcommands::List => {
            print_users(&dataset);
            return Ok(());
        },
        Subcommands::Add(user) => {
            dataset.add_user(user.to_user());
        },
        Subcommands::Update(user) => {
            dataset.update_user(&user.to_update())
                .ok_or_else(|| anyhow!("no such user {}", user.id))?;
        },
        Subcommands::Remove(remove) => {
            let removed = dataset.remove_user(&remove.id)
                .ok_or_else(|| anyhow!("no such user {}", remove.id))?;
            println!("removed {}", removed.to_string().bright_red());
        }
    }

    store.save(&dataset)?;
    store.close();
    Ok(())
}
