use anyhow::Result;

fn main() -> Result<()> {
    lesson_catalog::cli::run()
}
