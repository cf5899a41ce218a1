#[macro_use]
extern crate log;

use std::net::SocketAddr;

use afg_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, listen: SocketAddr, enable_cors: bool, cfg: Cfg) {
    web::run(connections.into(), listen, enable_cors, cfg).await;
}
