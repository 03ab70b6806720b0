//! Option values - the legal choices for every stack configuration field
//!
//! Each enum is one category of the option catalog. Wire names are kebab-case
//! and shared by serde (persisted state), clap (flags) and `Display`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A value that is not part of a category's legal set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {category} option '{value}' (expected one of: {expected})")]
pub struct UnknownOption {
    pub category: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($category:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize, clap::ValueEnum,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                #[value(name = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every legal value, in catalog order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Catalog category name
            pub const CATEGORY: &'static str = $category;

            /// Wire name of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == needle)
                    .ok_or_else(|| UnknownOption {
                        category: $category,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

catalog_enum! {
    /// Frontend framework (web or native)
    Frontend ("frontend") {
        /// React + TanStack Router (Vite)
        TanstackRouter => "tanstack-router",
        /// React Router v7 (Vite)
        ReactRouter => "react-router",
        /// TanStack Start
        TanstackStart => "tanstack-start",
        /// Next.js
        Next => "next",
        /// Nuxt
        Nuxt => "nuxt",
        /// SvelteKit
        Svelte => "svelte",
        /// SolidJS
        Solid => "solid",
        /// Expo + NativeWind
        NativeNativewind => "native-nativewind",
        /// Expo + Unistyles
        NativeUnistyles => "native-unistyles",
    }
}

impl Frontend {
    pub fn is_native(&self) -> bool {
        matches!(self, Frontend::NativeNativewind | Frontend::NativeUnistyles)
    }

    pub fn is_web(&self) -> bool {
        !self.is_native()
    }

    /// Web frontends built on React + Vite share one template family
    pub fn is_react_vite(&self) -> bool {
        matches!(self, Frontend::TanstackRouter | Frontend::ReactRouter)
    }
}

catalog_enum! {
    /// Backend framework
    Backend ("backend") {
        Hono => "hono",
        Express => "express",
        Fastify => "fastify",
        Elysia => "elysia",
        /// Next.js API routes in a dedicated server app
        Next => "next",
        /// Convex managed platform (no runtime, database or API layer of its own)
        Convex => "convex",
        None => "none",
    }
}

impl Backend {
    /// Backends that run as a standalone server process on a runtime
    pub fn needs_runtime(&self) -> bool {
        matches!(
            self,
            Backend::Hono | Backend::Express | Backend::Fastify | Backend::Elysia
        )
    }
}

catalog_enum! {
    /// Server runtime
    Runtime ("runtime") {
        Bun => "bun",
        Node => "node",
        /// Cloudflare Workers
        Workers => "workers",
        None => "none",
    }
}

catalog_enum! {
    /// Database engine
    Database ("database") {
        None => "none",
        Sqlite => "sqlite",
        Postgres => "postgres",
        Mysql => "mysql",
        Mongodb => "mongodb",
    }
}

catalog_enum! {
    /// Data-access layer
    Orm ("orm") {
        Drizzle => "drizzle",
        Prisma => "prisma",
        Mongoose => "mongoose",
        None => "none",
    }
}

impl Orm {
    /// Whether this ORM can talk to `database`. `Orm::None` supports nothing.
    pub fn supports(&self, database: Database) -> bool {
        match self {
            Orm::Drizzle => matches!(
                database,
                Database::Sqlite | Database::Postgres | Database::Mysql
            ),
            Orm::Prisma => matches!(
                database,
                Database::Sqlite | Database::Postgres | Database::Mysql | Database::Mongodb
            ),
            Orm::Mongoose => database == Database::Mongodb,
            Orm::None => false,
        }
    }

    /// ORMs able to drive `database`, in catalog order
    pub fn compatible_with(database: Database) -> Vec<Orm> {
        Orm::ALL
            .iter()
            .copied()
            .filter(|orm| orm.supports(database))
            .collect()
    }
}

catalog_enum! {
    /// Authentication provider
    Auth ("auth") {
        BetterAuth => "better-auth",
        Clerk => "clerk",
        None => "none",
    }
}

catalog_enum! {
    /// Typed API layer between web and server
    Api ("api") {
        Trpc => "trpc",
        Orpc => "orpc",
        None => "none",
    }
}

catalog_enum! {
    /// Database hosting / provisioning
    DbSetup ("db-setup") {
        None => "none",
        Turso => "turso",
        Neon => "neon",
        PrismaPostgres => "prisma-postgres",
        MongodbAtlas => "mongodb-atlas",
        Supabase => "supabase",
        /// Cloudflare D1 (edge SQLite)
        D1 => "d1",
        /// Local database in docker compose
        Docker => "docker",
    }
}

catalog_enum! {
    /// Optional tooling added to the project
    Addon ("addons") {
        /// Progressive web app manifest + service worker
        Pwa => "pwa",
        /// Desktop shell
        Tauri => "tauri",
        /// Astro Starlight docs site
        Starlight => "starlight",
        Biome => "biome",
        Husky => "husky",
        Turborepo => "turborepo",
        Oxlint => "oxlint",
        /// Fumadocs docs site
        Fumadocs => "fumadocs",
    }
}

impl Addon {
    /// Frontends this addon can attach to. `None` means it works with any stack.
    pub fn compatible_frontends(&self) -> Option<&'static [Frontend]> {
        match self {
            Addon::Pwa => Some(&[
                Frontend::TanstackRouter,
                Frontend::ReactRouter,
                Frontend::Solid,
                Frontend::Next,
            ]),
            Addon::Tauri => Some(&[
                Frontend::TanstackRouter,
                Frontend::ReactRouter,
                Frontend::Nuxt,
                Frontend::Svelte,
                Frontend::Solid,
                Frontend::Next,
            ]),
            _ => None,
        }
    }
}

catalog_enum! {
    /// Example application wired through the whole stack
    Example ("examples") {
        Todo => "todo",
        Ai => "ai",
    }
}

catalog_enum! {
    /// Deployment target for the web app
    WebDeploy ("web-deploy") {
        Workers => "workers",
        None => "none",
    }
}

catalog_enum! {
    /// Deployment target for the server app
    ServerDeploy ("server-deploy") {
        Workers => "workers",
        None => "none",
    }
}

catalog_enum! {
    PackageManager ("package-manager") {
        Npm => "npm",
        Pnpm => "pnpm",
        Bun => "bun",
    }
}

impl PackageManager {
    /// Command prefix used in generated scripts and next-step hints
    pub fn run_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            PackageManager::Pnpm => "pnpm run",
            PackageManager::Bun => "bun run",
        }
    }
}
