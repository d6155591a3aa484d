use std::{io, net::IpAddr};

use axum::{http::Request, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Settings;

mod error;
mod health;
mod ui;
mod waitlist;

pub use waitlist::schema::JoinWaitlistResponseBody;

#[derive(Clone)]
pub struct AppState {
    db: PgPool,
    base_url: String,
}

fn app_router() -> Router<AppState> {
    health::router()
        .merge(waitlist::router())
        .merge(ui::router())
        .fallback(ui::not_found::not_found_page)
}

pub struct App {
    listener: TcpListener,
    host: IpAddr,
    port: u16,
    base_url: String,
}

impl App {
    /// Binds the configured address. A port of `0` lets the OS pick one, see
    /// [`App::port`].
    pub async fn with(config: &Settings) -> Result<Self, io::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await?;
        let addr = listener.local_addr()?;

        Ok(Self {
            listener,
            host: addr.ip(),
            port: addr.port(),
            base_url: config.application.base_url.clone(),
        })
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn serve(self, db: PgPool) -> Result<(), io::Error> {
        let app = app_router()
            .with_state(AppState {
                db,
                base_url: self.base_url,
            })
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
