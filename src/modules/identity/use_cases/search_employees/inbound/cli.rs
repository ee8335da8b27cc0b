use crate::modules::identity::core::session::Session;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;
use anyhow::{Result, bail};

pub async fn employees<TStore>(
    state: &AppState<TStore>,
    session: &Session,
    search: &str,
) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    if !session.is_admin() {
        bail!("only administrators can list employees");
    }
    let found = state.search_employees_handler.handle(search).await?;
    let mut lines = vec![format!("Employees ({})", found.len())];
    lines.extend(found.iter().map(|e| {
        let admin = if e.is_admin { "  admin" } else { "" };
        format!("{}  {}  {}  {}{}", e.id, e.name, e.email, e.role, admin)
    }));
    Ok(lines.join("\n"))
}
