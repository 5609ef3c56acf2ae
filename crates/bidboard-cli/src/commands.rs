//! Subcommand handlers.

use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use bidboard::model::wire::parse_date;
use bidboard::{
    AuthenticatedUser, Collaborators, Config, HttpMarketplaceApi, JobDetailPage, JobLoad,
    JobSummary, MarketplaceApi, NavigationBroadcaster, Notification, NotificationBroadcaster,
    Severity, StaticIdentity, SubmitOutcome,
};
use clap::Args;
use tokio::sync::broadcast;

#[derive(Args, Debug)]
pub struct BidArgs {
    /// Job identifier
    pub id: String,

    /// Offered price
    #[arg(long)]
    pub price: String,

    /// Comment for the buyer
    #[arg(long, default_value = "")]
    pub comment: String,

    /// Proposed delivery date (YYYY-MM-DD or RFC 3339); defaults to now
    #[arg(long)]
    pub date: Option<String>,

    /// Email of the signed-in bidder
    #[arg(long, env = "BIDBOARD_USER_EMAIL")]
    pub email: String,

    /// Display name of the signed-in bidder
    #[arg(long, env = "BIDBOARD_USER_NAME")]
    pub name: Option<String>,
}

fn http_api(config: &Config) -> Result<HttpMarketplaceApi> {
    HttpMarketplaceApi::new(&config.api_base, &config.http).context("Failed to create API client")
}

pub async fn card(config: &Config, id: &str) -> Result<()> {
    let api = http_api(config)?;
    let job = api
        .fetch_job(id)
        .await
        .with_context(|| format!("Failed to fetch job {}", id))?;

    println!(
        "{}",
        JobSummary::with_limit(&job, config.summary.description_limit).render()
    );
    Ok(())
}

pub async fn job(config: &Config, id: &str) -> Result<()> {
    let api = http_api(config)?;
    let job = api
        .fetch_job(id)
        .await
        .with_context(|| format!("Failed to fetch job {}", id))?;

    println!("{}", bidboard::JobDetailView::from_job(&job).render());
    Ok(())
}

fn print_toasts(rx: &mut broadcast::Receiver<Notification>) {
    while let Ok(toast) = rx.try_recv() {
        match toast.severity {
            Severity::Success => println!("[success] {}", toast.message),
            Severity::Error => eprintln!("[error] {}", toast.message),
        }
    }
}

pub async fn bid(config: &Config, args: BidArgs) -> Result<()> {
    let notifier = NotificationBroadcaster::default();
    let navigator = NavigationBroadcaster::default();
    let mut toasts = notifier.subscribe();

    let user = AuthenticatedUser::new(args.email, args.name);
    let ctx = Collaborators::new(
        Arc::new(http_api(config)?),
        Arc::new(StaticIdentity::signed_in(user)),
        Arc::new(notifier),
        Arc::new(navigator.clone()),
    );

    let page = JobDetailPage::new(args.id, ctx);
    page.activate().await;

    match page.load_state().await {
        JobLoad::Loaded(job) => {
            println!("{}\n", bidboard::JobDetailView::from_job(&job).render());
        }
        JobLoad::Failed(reason) => {
            print_toasts(&mut toasts);
            bail!("Could not load job {}: {}", page.job_id(), reason);
        }
        JobLoad::Loading => bail!("Job {} did not load", page.job_id()),
    }

    page.set_price(args.price).await;
    page.set_comment(args.comment).await;
    if let Some(date) = &args.date {
        let date = parse_date(date).ok_or_else(|| anyhow!("Invalid date '{}'", date))?;
        page.set_bidding_date(date).await;
    }

    let outcome = page.submit().await;
    print_toasts(&mut toasts);

    match outcome {
        SubmitOutcome::Submitted(_) => {
            if let Some(route) = navigator.current() {
                println!("-> {}", route);
            }
            Ok(())
        }
        SubmitOutcome::Rejected(reason) => bail!("Bid rejected: {}", reason),
        SubmitOutcome::Failed(message) => bail!("Bid failed: {}", message),
        SubmitOutcome::AlreadySubmitting => bail!("A bid is already being submitted"),
    }
}
