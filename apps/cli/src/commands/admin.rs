use anyhow::anyhow;

use admin_cell::{filter_users, AdminService, UserUpdate};
use shared_models::auth::{Role, UserStatus};

use crate::cli::AdminCommand;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, command: AdminCommand) -> anyhow::Result<()> {
    ctx.enter("/admin")?;
    let token = ctx.token()?;
    let service = AdminService::with_client(ctx.api());

    match command {
        AdminCommand::Users { search } => {
            let users = service.get_all_users(&token).await?;
            for user in filter_users(&users, &search) {
                println!(
                    "{}  {:<28} {:<32} {:<10} {}",
                    user.id,
                    user.full_name(),
                    user.email,
                    user.role,
                    user.status.map(|s| s.to_string()).unwrap_or_default()
                );
            }
        }
        AdminCommand::Update { user_id, role, status } => {
            let update = UserUpdate {
                role: role.parse::<Role>().map_err(|e| anyhow!(e))?,
                status: status.parse::<UserStatus>().map_err(|e| anyhow!(e))?,
            };
            let user = service.update_user(&user_id, update, &token).await?;
            println!("{} is now {}", user.full_name(), user.role);
        }
        AdminCommand::Delete { user_id } => {
            service.delete_user(&user_id, &token).await?;
            println!("Deleted {}", user_id);
        }
    }
    Ok(())
}
