//! # Roles Command

use cincinnati_operator::naming::ChildRole;

pub fn roles_command() -> String {
    let mut out = format!("{:<24} {:<20} {}\n", "ROLE", "KIND", "NAME RULE");
    out.push_str(&"-".repeat(72));
    out.push('\n');
    for role in ChildRole::ALL {
        out.push_str(&format!(
            "{:<24} {:<20} {}\n",
            role.as_str(),
            role.kind().as_str(),
            role.rule()
        ));
    }
    out
}
