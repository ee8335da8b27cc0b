use crate::modules::identity::core::session::Session;
use crate::modules::identity::use_cases::login::command::Login;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;
use anyhow::Result;
use chrono::Utc;

pub fn render_session(session: &Session) -> String {
    let admin = if session.is_admin() { " (administrator)" } else { "" };
    format!(
        "{} <{}>{}\n{} | {} | {}",
        session.employee.name,
        session.employee.email,
        admin,
        session.employee.id,
        session.employee.role,
        session.employee.phone
    )
}

pub async fn login<TStore>(
    state: &AppState<TStore>,
    email: String,
    password: String,
) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    let session = state
        .login_handler
        .handle(Login {
            email,
            password,
            now: Utc::now(),
        })
        .await?;
    Ok(format!("Logged in as {}", render_session(&session)))
}
