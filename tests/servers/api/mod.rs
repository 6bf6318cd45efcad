use hwid_gate::servers::apis::server;

pub mod environment;
pub mod v1;

pub type Started = environment::Environment<server::Running>;
