use std::time::Duration;

use notification_cell::{NotificationCenter, NotificationService};
use shared_i18n::Translator;

use crate::cli::NotificationsCommand;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, command: NotificationsCommand) -> anyhow::Result<()> {
    let token = ctx.token()?;
    let tr = ctx.translator();
    let center = NotificationCenter::with_service(
        NotificationService::with_client(ctx.api()),
        ctx.config.notification_poll_interval(),
    );

    match command {
        NotificationsCommand::Watch => return watch(ctx, &center, &tr).await,
        NotificationsCommand::List => {
            center.reload(&token).await?;
        }
        NotificationsCommand::Read { notification_id } => {
            center.reload(&token).await?;
            center.mark_as_read(&notification_id, &token).await?;
        }
        NotificationsCommand::ReadAll => {
            center.reload(&token).await?;
            center.mark_all_as_read(&token).await?;
        }
    }

    print_list(&center, &tr).await;
    Ok(())
}

async fn print_list(center: &NotificationCenter, tr: &Translator) {
    let items = center.notifications().await;
    if items.is_empty() {
        println!("{}", tr.t("notifications.empty"));
        return;
    }

    println!("{} ({} {})", tr.t("notifications.title"), center.unread_count().await, tr.t("notifications.unread"));
    for item in items {
        let marker = if item.read { " " } else { "*" };
        println!(
            "{} {}  {}  {}",
            marker,
            item.id,
            item.created_on.as_deref().unwrap_or(""),
            item.message
        );
    }
}

/// Run the poller against the stored session until Ctrl-C.
async fn watch(ctx: &AppContext, center: &NotificationCenter, tr: &Translator) -> anyhow::Result<()> {
    let handle = center.spawn(ctx.sessions.subscribe(), ctx.cancel.clone());

    let mut last = None;
    while !ctx.cancel.is_cancelled() {
        let unread = center.unread_count().await;
        if last != Some(unread) {
            println!("{}: {}", tr.t("notifications.unread"), unread);
            last = Some(unread);
        }

        tokio::select! {
            _ = ctx.cancel.cancelled() => break,
            _ = tokio::time::sleep(Duration::from_secs(1)) => {}
        }
    }

    handle.await?;
    Ok(())
}
