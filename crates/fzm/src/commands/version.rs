//! The `version` command: a single-line identity banner.

use anyhow::Result;
use fzm_render::Template;

use crate::app::CommandContext;

const VERSION_TEMPLATE: &str =
    "{{bold}}{{name}}{{reset}} {{version}} ({{os}}/{{arch}}) {{dim}}{{author}}{{reset}}\n";

pub(crate) fn run(ctx: &mut CommandContext<'_>) -> Result<()> {
    let template = Template::parse(VERSION_TEMPLATE)?;
    let bindings = ctx.bindings()?;
    template.render_to(ctx.out, &bindings)?;
    Ok(())
}
