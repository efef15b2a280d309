//! # xtask - Автоматизация сборки проекта
//!
//! См. [`HELP_TEXT`] для списка доступных команд.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use xshell::{Shell, cmd};

/// Текст справки для команды xtask.
pub const HELP_TEXT: &str = r#"xtask

Использование:
  cargo run -p xtask -- <команда>

Команды:
  help         Показать это сообщение
  fmt          Запустить rustfmt
  fmt-check    Проверить форматирование (CI)
  clippy       Запустить clippy (воркспейс)
  test         Запустить тесты через nextest и doc-тесты
  ci           Запустить fmt-check + clippy + test (профиль CI)
  demo         Экспортировать фикстуру e2e в target/demo/genealogy.json

Примечание:
  cargo-nextest устанавливается автоматически при первом запуске тестов
"#;

/// Фикстура, на которой запускается `demo`.
const DEMO_SOURCE: &str = "crates/e2e-tests/fixtures/raw_page.txt";

/// Куда `demo` пишет результат.
const DEMO_OUTPUT: &str = "target/demo/genealogy.json";

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "help".to_string());

    let sh = Shell::new()?;
    sh.change_dir(project_root()?);

    match cmd.as_str() {
        "help" | "-h" | "--help" => {
            println!("{HELP_TEXT}");
            Ok(())
        }
        "fmt" => Ok(cmd!(sh, "cargo fmt --all").run()?),
        "fmt-check" => Ok(cmd!(sh, "cargo fmt --all -- --check").run()?),
        "clippy" => Ok(cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?),
        "test" => test(&sh, false),
        "ci" => {
            cmd!(sh, "cargo fmt --all -- --check").run()?;
            cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
            test(&sh, true)
        }
        "demo" => demo(&sh),
        other => bail!("Неизвестная команда: {other}\n\nЗапустите: cargo run -p xtask -- help"),
    }
}

/// Запустить unit- и e2e-тесты через nextest, затем doc-тесты.
///
/// e2e-тесты вызывают бинарник `genealogy-export`, поэтому воркспейс
/// собирается заранее.
fn test(sh: &Shell, ci: bool) -> Result<()> {
    ensure_nextest(sh)?;
    cmd!(sh, "cargo build --workspace").run()?;

    let profile = if ci { "ci" } else { "default" };
    cmd!(sh, "cargo nextest run --workspace --profile {profile}").run()?;

    // nextest не поддерживает doc-тесты
    cmd!(sh, "cargo test --workspace --doc").run()?;
    Ok(())
}

/// Экспортировать фикстуру и показать сводку.
fn demo(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo run -q -p genealogy-cli -- --source {DEMO_SOURCE} --output {DEMO_OUTPUT}")
        .env("RUST_LOG", "debug")
        .run()?;
    Ok(())
}

/// Корень воркспейса: родитель директории крейта xtask.
fn project_root() -> Result<PathBuf> {
    Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .context("CARGO_MANIFEST_DIR не имеет родительской директории")?
        .to_path_buf())
}

/// Проверить наличие cargo-nextest и установить при необходимости.
fn ensure_nextest(sh: &Shell) -> Result<()> {
    if cmd!(sh, "cargo nextest --version").quiet().run().is_ok() {
        return Ok(());
    }

    eprintln!("cargo-nextest не найден, устанавливаю...");
    cmd!(sh, "cargo install cargo-nextest --locked").run()?;
    Ok(())
}
