use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dxh_core::constants::{DEFAULT_LABELER_ID, STANDARD_LOT_LEN};
use dxh_core::{catalog, defaults, reagent, validation};
use dxh_core::{ReagentKind, ReagentParams, Udi, ValidationCode};

#[derive(Parser)]
#[command(name = "dxh")]
#[command(about = "DxH reagent label generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a reagent label (validation code, barcode payload, UDI)
    Generate {
        /// Known reagent type: cleaner, lyse, or diluent
        #[arg(long, conflicts_with = "product_code")]
        reagent: Option<String>,
        /// Product code for reagents outside the catalog
        #[arg(long)]
        product_code: Option<String>,
        /// HIBC labeler id (default: DXH_LABELER_ID env, then "+H628")
        #[arg(long)]
        labeler_id: Option<String>,
        /// Manufacture date, YYYY-MM-DD (default: today)
        #[arg(long)]
        manufacture_date: Option<String>,
        /// Expiration date, YYYY-MM-DD (default: one year after manufacture)
        #[arg(long)]
        expiration_date: Option<String>,
        /// Lot number, 7 characters (default: derived from reagent and manufacture date)
        #[arg(long)]
        lot: Option<String>,
        /// Container number (default: derived from manufacture date)
        #[arg(long)]
        container: Option<String>,
        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },
    /// Check a validation code against label fields
    Verify {
        /// Expiration date, YYYY-MM-DD
        expiration_date: String,
        /// Lot number
        lot: String,
        /// Container number, raw (unpadded) form
        container: String,
        /// Validation code to check, 5 lowercase hex characters
        code: String,
    },
    /// List the known reagent catalog
    Catalog,
}

/// JSON shape of `dxh generate --json`.
#[derive(serde::Serialize)]
struct GenerateOutput<'a> {
    #[serde(flatten)]
    params: &'a ReagentParams,
    manufacture_date: &'a str,
    validation_code: &'a str,
    barcode: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    udi: Option<String>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("dxh=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate {
            reagent,
            product_code,
            labeler_id,
            manufacture_date,
            expiration_date,
            lot,
            container,
            json,
        }) => run_generate(
            reagent,
            product_code,
            labeler_id,
            manufacture_date,
            expiration_date,
            lot,
            container,
            json,
        ),
        Some(Commands::Verify {
            expiration_date,
            lot,
            container,
            code,
        }) => run_verify(&expiration_date, &lot, &container, &code),
        Some(Commands::Catalog) => {
            for kind in ReagentKind::ALL {
                println!(
                    "{}: product code {}, GTIN {}, lot prefix {}",
                    kind,
                    kind.product_code(),
                    kind.gtin(),
                    kind.lot_prefix()
                );
            }
            Ok(())
        }
        None => {
            println!("Use 'dxh --help' for commands");
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_generate(
    reagent: Option<String>,
    product_code: Option<String>,
    labeler_id: Option<String>,
    manufacture_date: Option<String>,
    expiration_date: Option<String>,
    lot: Option<String>,
    container: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let product_code = match (reagent, product_code) {
        (Some(name), _) => name.parse::<ReagentKind>()?.product_code().to_string(),
        (None, Some(code)) => code,
        (None, None) => ReagentKind::Cleaner.product_code().to_string(),
    };

    let manufacture_date =
        manufacture_date.unwrap_or_else(|| defaults::iso_date(Local::now().date_naive()));

    let expiration_date = match expiration_date {
        Some(date) => date,
        None => {
            let manufactured = NaiveDate::parse_from_str(&manufacture_date, "%Y-%m-%d")
                .with_context(|| format!("invalid manufacture date: '{}'", manufacture_date))?;
            defaults::iso_date(defaults::default_expiration_date(manufactured))
        }
    };

    let labeler_id = labeler_id.unwrap_or_else(|| {
        std::env::var("DXH_LABELER_ID").unwrap_or_else(|_| DEFAULT_LABELER_ID.to_string())
    });

    let lot = lot.unwrap_or_else(|| defaults::default_lot(&product_code, &manufacture_date));
    let container = container.unwrap_or_else(|| defaults::default_container(&manufacture_date));

    if !catalog::is_standard_lot(&lot) {
        bail!(
            "lot number must be {} characters, got {} ('{}')",
            STANDARD_LOT_LEN,
            lot.len(),
            lot
        );
    }

    let params = ReagentParams {
        labeler_id,
        product_code,
        expiration_date,
        lot,
        container,
    };

    let data = reagent::generate(&params)
        .context("label fields incomplete; could not generate reagent data")?;
    let udi = Udi::generate(
        &params.product_code,
        &manufacture_date,
        &params.expiration_date,
        &params.lot,
    );

    if json {
        let output = GenerateOutput {
            params: &params,
            manufacture_date: &manufacture_date,
            validation_code: data.validation_code.as_str(),
            barcode: data.barcode.as_str(),
            udi: udi.as_ref().map(Udi::to_string),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let kind = ReagentKind::from_product_code(&params.product_code);
    match kind {
        Some(kind) => println!("Reagent:          {} ({})", kind, params.product_code),
        None => println!("Reagent:          custom ({})", params.product_code),
    }
    println!("Labeler id:       {}", params.labeler_id);
    println!("Manufacture date: {}", manufacture_date);
    println!("Expiration date:  {}", params.expiration_date);
    println!("Lot:              {}", params.lot);
    println!("Container:        {}", params.container);
    println!();
    println!("Validation code:  {}", data.validation_code);
    println!("Barcode data:     {}", data.barcode);
    match udi {
        Some(udi) => println!("UDI:              {}", udi),
        None => println!("UDI:              unavailable (product code not in catalog)"),
    }

    Ok(())
}

fn run_verify(expiration_date: &str, lot: &str, container: &str, code: &str) -> anyhow::Result<()> {
    let claimed = ValidationCode::parse(code)?;
    let expected = validation::calculate(expiration_date, lot, container)
        .context("could not derive a validation code; check the date format and fields")?;

    if claimed == expected {
        println!("OK: validation code {} matches", expected);
        Ok(())
    } else {
        eprintln!("MISMATCH: expected {}, label says {}", expected, claimed);
        std::process::exit(1);
    }
}
