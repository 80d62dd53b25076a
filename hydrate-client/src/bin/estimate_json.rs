use std::{env, error::Error, fs::File, io::BufReader};

use hydrate_client::estimate_batch;
use hydrate_model::form::FormInput;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "inputs.json".to_owned());
    let url = args
        .next()
        .unwrap_or_else(|| "http://localhost:3000".to_owned());

    let file = File::open(&path)?;
    let forms: Vec<FormInput> = serde_json::from_reader(BufReader::new(file))?;
    info!("Loaded {} forms from {}", forms.len(), path);

    let client = hydrate_client::create(url);
    for result in estimate_batch(&client, &forms).await {
        match result {
            Ok(result) => println!("{}", serde_json::to_string(&result)?),
            Err(e) => println!("error: {}", e),
        }
    }

    Ok(())
}
