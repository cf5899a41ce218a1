use std::net::SocketAddr;

use rocket::{config::Config as RocketCfg, Build, Rocket, Route};

pub mod api;
mod frontend;
mod guards;
mod markdown;
pub mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// Shown as the site name in page titles and the navigation bar.
    pub instance_name: String,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(cfg);
    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(db: sqlite::Connections, listen: SocketAddr, enable_cors: bool, cfg: Cfg) {
    let mut rocket_cfg = RocketCfg::default();
    rocket_cfg.address = listen.ip();
    rocket_cfg.port = listen.port();

    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        cfg,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
