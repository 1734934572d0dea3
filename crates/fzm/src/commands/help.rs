//! The `help` command.
//!
//! Renders the identity header, usage line, the sorted command table with
//! aligned descriptions, and the copyright line. Also what the user sees
//! for an absent or unknown command.

use anyhow::Result;
use fzm_render::Template;

use crate::app::CommandContext;

/// Fixed template; the command table iterates the registry snapshot, and
/// all colour arrives through palette bindings so the same template serves
/// styled and plain output.
const HELP_TEMPLATE: &str = "\
{{bold}}{{name}}{{reset}} {{version}}
{{description}}

{{bold}}Usage:{{reset}} {{name}} <command> [args...]

{{bold}}Commands:{{reset}}
{{#commands}}  {{cyan}}{{name}}{{reset}}{{padding}}{{about}}
{{/commands}}
{{copyright}}
";

pub(crate) fn run(ctx: &mut CommandContext<'_>) -> Result<()> {
    let template = Template::parse(HELP_TEMPLATE)?;
    let bindings = ctx.bindings()?;
    template.render_to(ctx.out, &bindings)?;
    Ok(())
}
