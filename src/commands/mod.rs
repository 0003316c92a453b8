//! Command tree shared by one-shot invocations and the interactive shell.

pub mod session;
pub mod shell;

pub use session::Session;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::domain::{DailyRevenueQuery, OrderAction};
use crate::error::{AuthError, OrderError, ProfileError, ValidationErrors};
use crate::forms::{go_to_page, orders_query, OrderFilterForm, SignInForm, SignUpForm, StoreProfileForm};
use crate::location::Location;
use crate::ui::dashboard::{render_daily_revenue, render_dashboard, render_popular_products};
use crate::ui::nav::{self, render_header};
use crate::ui::order_details::render_order_details;
use crate::ui::orders_table::render_orders_table;
use crate::ui::order_status::status_badge;
use crate::ui::toast::Toast;
use crate::ui::bold;

const STATUS_VALUES: [&str; 6] = ["all", "pending", "canceled", "processing", "delivering", "delivered"];

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Request a magic sign-in link.
    SignIn {
        #[arg(long)]
        email: String,
    },

    /// Register a new restaurant.
    SignUp {
        #[arg(long)]
        restaurant_name: String,
        #[arg(long)]
        manager_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },

    /// Managed restaurant profile.
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Orders listing, details and status changes.
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },

    /// Summary cards, revenue chart and popular products.
    Dashboard,

    /// Individual metrics.
    Metrics {
        #[command(subcommand)]
        action: MetricsAction,
    },

    /// Navigate to a path such as `/orders?status=pending`.
    Go { location: String },

    /// Interactive session sharing one cache.
    Shell,

    /// Leave the interactive session.
    Exit,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ProfileAction {
    Show,
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum OrdersAction {
    List {
        /// Start from this location instead of the current one.
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        order_id: Option<String>,
        #[arg(long)]
        customer_name: Option<String>,
        #[arg(long, value_parser = STATUS_VALUES)]
        status: Option<String>,
        /// 1-based page number.
        #[arg(long)]
        page: Option<u32>,
        /// Remove every filter.
        #[arg(long, conflicts_with_all = ["order_id", "customer_name", "status"])]
        clear: bool,
    },
    Show { order_id: String },
    Approve { order_id: String },
    Cancel { order_id: String },
    Dispatch { order_id: String },
    Deliver { order_id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum MetricsAction {
    DailyRevenue {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    PopularProducts,
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "pizza.shop")]
pub struct ShellCommand {
    #[command(subcommand)]
    pub command: Command,
}

/// Runs a command against the session and returns the text to print.
/// Errors that escape are rendered by the caller's error boundary.
pub async fn execute(command: Command, session: &mut Session) -> anyhow::Result<String> {
    match command {
        Command::SignIn { email } => Ok(sign_in(session, SignInForm { email }).await),
        Command::SignUp { restaurant_name, manager_name, email, phone } => {
            let form = SignUpForm { restaurant_name, manager_name, email, phone };
            Ok(sign_up(session, form).await)
        }
        Command::Profile { action: ProfileAction::Show } => show_profile(session).await,
        Command::Profile { action: ProfileAction::Update { name, description } } => {
            update_profile(session, name, description).await
        }
        Command::Orders { action } => orders(session, action).await,
        Command::Dashboard => {
            session.location = Location::parse(nav::DASHBOARD)?;
            dashboard(session).await
        }
        Command::Metrics { action: MetricsAction::DailyRevenue { from, to } } => {
            let points = session.system.metrics_client.daily_revenue(&DailyRevenueQuery { from, to }).await?;
            Ok(render_daily_revenue(&points))
        }
        Command::Metrics { action: MetricsAction::PopularProducts } => {
            let products = session.system.metrics_client.popular_products().await?;
            Ok(render_popular_products(&products))
        }
        Command::Go { location } => {
            session.location = Location::parse(&location)?;
            render_route(session).await
        }
        Command::Shell => Ok("Já está no shell.".to_string()),
        Command::Exit => Ok(String::new()),
    }
}

/// Renders whatever page the session's location points at.
async fn render_route(session: &mut Session) -> anyhow::Result<String> {
    match session.location.path() {
        nav::DASHBOARD => dashboard(session).await,
        nav::ORDERS => render_orders(session).await,
        nav::SIGN_IN => {
            let email = session.location.get("email").unwrap_or_default();
            Ok(format!("{}\nAcompanhe suas vendas pelo painel do parceiro!\nE-mail: {}", bold("Acessar painel"), email))
        }
        nav::SIGN_UP => Ok(format!("{}\nSeja um parceiro e comece suas vendas!", bold("Criar conta grátis"))),
        other => anyhow::bail!("Página não encontrada: {}", other),
    }
}

fn render_validation(errors: &ValidationErrors) -> String {
    errors.to_string()
}

async fn sign_in(session: &Session, form: SignInForm) -> String {
    match session.system.auth_client.sign_in(&form).await {
        Ok(()) => Toast::success("Enviamos um link de autenticação para seu e-mail.")
            .with_action("Reenviar", Location::parse(nav::SIGN_IN).unwrap_or_default())
            .render(),
        Err(AuthError::Validation(errors)) => render_validation(&errors),
        Err(e) => {
            warn!(error = %e, "Sign-in failed");
            Toast::error("Credenciais inválidas.").render()
        }
    }
}

async fn sign_up(session: &Session, form: SignUpForm) -> String {
    match session.system.auth_client.sign_up(&form).await {
        Ok(body) => {
            let mut login = Location::parse(nav::SIGN_IN).unwrap_or_default();
            login.set("email", &body.email);
            Toast::success("Restaurante cadastrado com sucesso.")
                .with_action("Login", login)
                .render()
        }
        Err(AuthError::Validation(errors)) => render_validation(&errors),
        Err(e) => {
            warn!(error = %e, "Sign-up failed");
            Toast::error("Erro ao cadastrar restaurante.").render()
        }
    }
}

async fn show_profile(session: &Session) -> anyhow::Result<String> {
    let restaurant = session.system.profile_client.get_managed_restaurant().await?;
    Ok(format!(
        "{}\nNome: {}\nDescrição: {}",
        bold("Perfil da loja"),
        restaurant.name,
        restaurant.description.as_deref().unwrap_or("")
    ))
}

async fn update_profile(session: &Session, name: Option<String>, description: Option<String>) -> anyhow::Result<String> {
    let profile = &session.system.profile_client;
    let current = profile.get_managed_restaurant().await?;

    let mut form = StoreProfileForm::from_restaurant(Some(&current));
    if let Some(name) = name {
        form.name = name;
    }
    if description.is_some() {
        form.description = description;
    }

    let toast = match profile.update_profile(&form).await {
        Ok(()) => Toast::success("Perfil da loja atualizado com sucesso."),
        Err(ProfileError::Validation(errors)) => return Ok(render_validation(&errors)),
        Err(ProfileError::Cache(e)) => return Err(e.into()),
        Err(e) => {
            warn!(error = %e, "Profile update failed");
            Toast::error("Não foi possível atualizar o perfil da loja.")
        }
    };

    let cached = profile.cached_profile().await?;
    let name = cached.map(|r| r.name).unwrap_or_default();
    Ok(format!("{}\n{}", toast.render(), render_header(&session.location, Some(name.as_str()))))
}

async fn orders(session: &mut Session, action: OrdersAction) -> anyhow::Result<String> {
    let (order_id, action) = match action {
        OrdersAction::List { location, order_id, customer_name, status, page, clear } => {
            let mut location = match location {
                Some(raw) => Location::parse(&raw)?,
                None if session.location.path() == nav::ORDERS => session.location.clone(),
                None => Location::parse(nav::ORDERS)?,
            };

            let mut form = OrderFilterForm::from_location(&location);
            if clear {
                form.clear(&mut location);
            } else if order_id.is_some() || customer_name.is_some() || status.is_some() {
                form.order_id = order_id.unwrap_or(form.order_id);
                form.customer_name = customer_name.unwrap_or(form.customer_name);
                form.status = status.unwrap_or(form.status);
                form.submit(&mut location);
            }
            if let Some(page) = page {
                go_to_page(&mut location, page.saturating_sub(1));
            }

            session.location = location;
            return render_orders(session).await;
        }
        OrdersAction::Show { order_id } => {
            let order = session.system.order_client.get_order_details(&order_id).await?;
            return Ok(render_order_details(&order, Utc::now()));
        }
        OrdersAction::Approve { order_id } => (order_id, OrderAction::Approve),
        OrdersAction::Cancel { order_id } => (order_id, OrderAction::Cancel),
        OrdersAction::Dispatch { order_id } => (order_id, OrderAction::Dispatch),
        OrdersAction::Deliver { order_id } => (order_id, OrderAction::Deliver),
    };

    match session.system.order_client.perform(&order_id, action).await {
        Ok(()) => Ok(String::new()),
        Err(OrderError::ActionNotAvailable { action, status }) => Ok(Toast::error(format!(
            "{}: indisponível para pedidos com status {}.",
            action.label(),
            status_badge(status).description
        ))
        .render()),
        Err(e) => Err(e.into()),
    }
}

async fn render_orders(session: &Session) -> anyhow::Result<String> {
    let query = orders_query(&session.location);
    info!(location = %session.location, "Listing orders");
    let page = session.system.order_client.list_orders(&query).await?;
    let filters = OrderFilterForm::from_location(&session.location);

    Ok(format!(
        "{}\n\n{}\nFiltros: pedido={:?} cliente={:?} status={}\nLink: {}\n\n{}",
        header(session).await,
        bold("Pedidos"),
        filters.order_id,
        filters.customer_name,
        filters.status,
        session.location,
        render_orders_table(&page, Utc::now())
    ))
}

async fn dashboard(session: &Session) -> anyhow::Result<String> {
    let metrics = session.system.metrics_client.dashboard().await?;
    Ok(format!("{}\n\n{}", header(session).await, render_dashboard(&metrics)))
}

/// Header with the restaurant name when it can be loaded. A failure here
/// only costs the name, not the page.
async fn header(session: &Session) -> String {
    let name = match session.system.profile_client.get_managed_restaurant().await {
        Ok(restaurant) => Some(restaurant.name),
        Err(e) => {
            warn!(error = %e, "Managed restaurant unavailable");
            None
        }
    };
    render_header(&session.location, name.as_deref())
}
