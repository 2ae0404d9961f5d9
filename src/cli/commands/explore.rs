use crate::config::Config;
use crate::core::session;
use crate::errors::AppResult;
use crate::ui::prompt;

/// Handle the interactive session on stdin/stdout
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut console = prompt::stdio();
    session::explore(cfg, &mut console)
}
