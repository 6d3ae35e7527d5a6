use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use forms_provisioner::{provision, ProvisioningResult, Settings};

fn print_summary(result: &ProvisioningResult, output_path: &Path) {
    println!();
    println!("{}", "=".repeat(60));
    println!("All forms created successfully!");
    println!();

    for (name, form) in result.entries() {
        println!("{}", name);
        println!("  direct: {}", form.direct_url);
        println!("  embed:  {}", form.embed_url);
    }

    println!();
    println!("Form URLs saved to: {}", output_path.display());
    println!();
    println!("Next steps:");
    println!("1. Share forms with respondents");
    println!("2. Set up form notifications (Settings > Responses > Get email notifications)");
    println!("3. Link responses to Google Sheets for analysis");
    println!("4. Integrate with your website using the embed URLs");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let settings = Settings::load();

    // Initialize tracing for logging, RUST_LOG takes precedence over --verbose
    let default_level = if settings.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("Creating Google Forms for Ralph/Beneficious...");
    println!("{}", "=".repeat(60));

    match provision(&settings).await {
        Ok(result) => {
            info!("Provisioning finished");
            print_summary(&result, &settings.output_path);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Provisioning failed: {}", err);
            println!("An error occurred: {}", err);
            ExitCode::FAILURE
        }
    }
}
