use anyhow::Result;
use ledgersim::application::LedgerGenerator;
use ledgersim::domain::SpendingProfile;
use ledgersim::io::Exporter;

const OUTPUT_FILE: &str = "Transactions.xlsx";

fn main() -> Result<()> {
    let generator = LedgerGenerator::new(SpendingProfile::default());
    let rows = generator.generate();

    let count = Exporter::new(&rows).export_xlsx(OUTPUT_FILE)?;
    println!("Wrote {} transactions to {}", count, OUTPUT_FILE);

    Ok(())
}
