//! Agent command handler.

use toolwire_core::ActiveAgent;

use crate::bootstrap::CliContext;

/// Show the active agent and where state goes.
pub fn execute(ctx: &CliContext) {
    let active = ctx.agent();
    for agent in ActiveAgent::ALL {
        let marker = if agent == active { "*" } else { " " };
        println!(
            "{marker} {:<10} route {:<28} agent {}",
            agent.key(),
            agent.route(),
            agent.agent_name()
        );
    }
    println!();
    if ctx.is_publishing() {
        println!("Publishing to {}", ctx.agent_channel().describe());
    } else {
        println!("Publishing disabled (no agent URL configured)");
    }
}
