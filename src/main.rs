use std::env;
use std::process;

use log::error;

use recipe_relay::{service_from_env, Error};

fn usage() -> ! {
    eprintln!("Usage: recipe-relay              list popular recipes");
    eprintln!("       recipe-relay <id>         fetch one recipe by id");
    eprintln!("       recipe-relay search <q>   search recipes by query");
    process::exit(2);
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let service = match service_from_env() {
        Ok(service) => service,
        Err(e) => {
            error!("failed to initialize: {e}");
            process::exit(1);
        }
    };

    let result = match args.as_slice() {
        [] => service
            .popular()
            .await
            .and_then(|summaries| serde_json::to_string_pretty(&summaries).map_err(to_provider)),
        [cmd, query] if cmd == "search" => service
            .search(query)
            .await
            .and_then(|summaries| serde_json::to_string_pretty(&summaries).map_err(to_provider)),
        [id] => match id.parse::<i64>() {
            Ok(id) => service
                .recipe(id)
                .await
                .and_then(|recipe| serde_json::to_string_pretty(&recipe).map_err(to_provider)),
            Err(_) => usage(),
        },
        _ => usage(),
    };

    match result {
        Ok(json) => println!("{json}"),
        Err(Error::QuotaExceeded) => {
            error!("provider quota exceeded, try again later");
            process::exit(1);
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

fn to_provider(e: serde_json::Error) -> Error {
    Error::Provider(e.to_string())
}
