//! The fixed list of facts reported to Ansible.
//!
//! Keys are part of the contract with the playbooks that consume them.
//! Append new facts; never rename or drop one.

use super::types::{Check, FactDef, Location};

/// Every fact, in reporting order.
pub const CHECKLIST: &[FactDef] = &[
    FactDef::new("vd", Check::Executable("vd")),
    FactDef::new("rg", Check::Executable("rg")),
    FactDef::new("conda", Check::Executable("conda")),
    FactDef::new("fd", Check::Executable("fd")),
    FactDef::new("nvim", Check::Executable("nvim")),
    FactDef::new("fzf", Check::Executable("fzf")),
    FactDef::new("npm", Check::Executable("npm")),
    FactDef::new("dotfiles", Check::Path(Location::Home("~/.config/nvim/init.lua"))),
    FactDef::new(
        "bioconda",
        Check::FileContains {
            file: Location::Home("~/.condarc"),
            needle: "bioconda",
        },
    ),
    FactDef::new(
        "bioconda-recipes",
        Check::Path(Location::Home("~/proj/bioconda-recipes")),
    ),
    FactDef::new(
        "bioconda-docs",
        Check::Path(Location::Home("~/proj/bioconda-docs")),
    ),
    FactDef::new(
        "bioconda-utils",
        Check::Path(Location::Home("~/proj/bioconda-utils")),
    ),
    FactDef::new("mason", Check::Path(Location::Home("~/.local/share/nvim/mason"))),
    FactDef::new("lazy", Check::Path(Location::Home("~/.local/share/nvim/lazy"))),
    FactDef::new(
        "conda-usable",
        Check::Usable {
            executable: "conda",
            fallback: Location::Data("miniforge3/bin/conda"),
        },
    ),
    FactDef::new(
        "conda-needs-path",
        Check::NeedsPathEntry {
            env_dir: Location::Data("miniforge3/bin"),
            executable: "conda",
        },
    ),
    FactDef::new(
        "nvim-needs-link",
        Check::NeedsLink {
            install: Location::Data("nvim-linux-x86_64/bin/nvim"),
            link: Location::Home("~/.local/bin/nvim"),
        },
    ),
    FactDef::new(
        "npm-needs-path",
        Check::NeedsPathEntry {
            env_dir: Location::Data("nodejs/bin"),
            executable: "npm",
        },
    ),
];

/// All fact keys, in reporting order.
pub fn fact_keys() -> impl Iterator<Item = &'static str> {
    CHECKLIST.iter().map(|def| def.key)
}
