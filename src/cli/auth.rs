use crate::{config::Config, error, server};

pub fn auth_url(config: Config) {
    let state = match server::build_state(config) {
        Ok(state) => state,
        Err(e) => error!("Cannot initialize client: {}", e),
    };

    match state.tokens.authorization_url(&state.config().scope) {
        Ok(url) => println!("{}", url),
        Err(e) => error!("{}", e),
    }
}
