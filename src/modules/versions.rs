//! Static version registry
//!
//! The single place package versions live. Modules name packages; bumping a
//! version is an edit here, never in a module.

use std::collections::BTreeMap;
use std::sync::OnceLock;

const VERSIONS: &[(&str, &str)] = &[
    ("@ai-sdk/google", "^1.2.18"),
    ("@ai-sdk/react", "^1.2.12"),
    ("@astrojs/starlight", "^0.34.3"),
    ("@biomejs/biome", "^1.9.4"),
    ("@clerk/clerk-react", "^5.31.4"),
    ("@clerk/nextjs", "^6.20.0"),
    ("@elysiajs/cors", "^1.3.3"),
    ("@fastify/cors", "^11.0.1"),
    ("@hono/node-server", "^1.14.3"),
    ("@libsql/client", "^0.15.8"),
    ("@neondatabase/serverless", "^1.0.0"),
    ("@opennextjs/cloudflare", "^1.1.0"),
    ("@orpc/client", "^1.4.1"),
    ("@orpc/server", "^1.4.1"),
    ("@orpc/tanstack-query", "^1.4.1"),
    ("@prisma/client", "^6.8.2"),
    ("@solidjs/router", "^0.15.3"),
    ("@sveltejs/adapter-auto", "^6.0.1"),
    ("@sveltejs/kit", "^2.21.1"),
    ("@sveltejs/vite-plugin-svelte", "^5.0.3"),
    ("@tanstack/react-query", "^5.80.5"),
    ("@tanstack/react-router", "^1.120.15"),
    ("@tanstack/react-start", "^1.120.15"),
    ("@tanstack/router-plugin", "^1.120.15"),
    ("@tauri-apps/cli", "^2.5.0"),
    ("@trpc/client", "^11.1.4"),
    ("@trpc/server", "^11.1.4"),
    ("@trpc/tanstack-react-query", "^11.1.4"),
    ("@types/bun", "^1.2.15"),
    ("@types/cors", "^2.8.18"),
    ("@types/express", "^5.0.2"),
    ("@types/node", "^22.15.29"),
    ("@types/pg", "^8.15.4"),
    ("@types/react", "^19.1.6"),
    ("@types/react-dom", "^19.1.5"),
    ("@vitejs/plugin-react", "^4.5.0"),
    ("ai", "^4.3.16"),
    ("astro", "^5.8.1"),
    ("better-auth", "^1.2.8"),
    ("convex", "^1.24.3"),
    ("cors", "^2.8.5"),
    ("dotenv", "^16.5.0"),
    ("drizzle-kit", "^0.31.1"),
    ("drizzle-orm", "^0.44.1"),
    ("elysia", "^1.3.3"),
    ("expo", "^53.0.9"),
    ("expo-router", "^5.0.7"),
    ("express", "^5.1.0"),
    ("fastify", "^5.3.3"),
    ("fumadocs-core", "^15.4.2"),
    ("fumadocs-mdx", "^11.6.6"),
    ("fumadocs-ui", "^15.4.2"),
    ("hono", "^4.7.10"),
    ("husky", "^9.1.7"),
    ("lint-staged", "^16.1.0"),
    ("mongoose", "^8.15.1"),
    ("mysql2", "^3.14.1"),
    ("nativewind", "^4.1.23"),
    ("next", "15.3.3"),
    ("nuxt", "^3.17.4"),
    ("oxlint", "^0.17.0"),
    ("pg", "^8.16.0"),
    ("prisma", "^6.8.2"),
    ("react", "^19.1.0"),
    ("react-dom", "^19.1.0"),
    ("react-native", "0.79.2"),
    ("react-native-unistyles", "^3.0.0-rc.4"),
    ("react-router", "^7.6.1"),
    ("solid-js", "^1.9.7"),
    ("svelte", "^5.33.10"),
    ("tailwindcss", "^3.4.17"),
    ("tsx", "^4.19.4"),
    ("turbo", "^2.5.4"),
    ("typescript", "^5.8.3"),
    ("vite", "^6.3.5"),
    ("vite-plugin-pwa", "^1.0.0"),
    ("vite-plugin-solid", "^2.11.6"),
    ("vue", "^3.5.16"),
    ("wrangler", "^4.18.0"),
    ("zod", "^3.25.48"),
];

/// Package name to semver range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRegistry {
    entries: BTreeMap<&'static str, &'static str>,
}

impl VersionRegistry {
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// The built-in table, built once per process
    pub fn builtin() -> &'static VersionRegistry {
        static BUILTIN: OnceLock<VersionRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| VersionRegistry::new(VERSIONS))
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}
