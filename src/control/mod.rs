pub mod physics_engine;
pub mod scenario;
pub mod validator;
