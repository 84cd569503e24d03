use anyhow::Result;

fn main() -> Result<()> {
    domain_label::cli::run()
}
