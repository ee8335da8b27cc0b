use crate::modules::identity::use_cases::login::inbound::cli::render_session;
use crate::modules::identity::use_cases::register::command::Register;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "Field Technician")]
    pub role: String,
    #[arg(long)]
    pub password: String,
}

pub async fn register<TStore>(state: &AppState<TStore>, args: RegisterArgs) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    let session = state
        .register_handler
        .handle(Register {
            name: args.name,
            email: args.email,
            phone: args.phone,
            role: args.role,
            password: args.password,
            now: Utc::now(),
        })
        .await?;
    Ok(format!("Registered and logged in as {}", render_session(&session)))
}
