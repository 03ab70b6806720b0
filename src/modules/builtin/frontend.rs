use super::web_is;
use crate::domain::value_objects::{Frontend, Workspace};
use crate::modules::{Category, GeneratorModule, Predicate};

const WEB_PACKAGE_JSON: &str = r#"{
  "name": "web",
  "version": "0.0.0",
  "private": true,
  "type": "module"
}
"#;

const WEB_TSCONFIG: &str = r#"{
  "extends": "../../tsconfig.base.json",
  "compilerOptions": {
    "jsx": "{% if web == "solid" %}preserve{% else %}react-jsx{% endif %}",
    "lib": ["DOM", "DOM.Iterable", "ES2022"]{% if web == "solid" %},
    "jsxImportSource": "solid-js"{% endif %}
  },
  "include": ["src"]
}
"#;

const REACT_VITE_CONFIG: &str = r#"import { defineConfig } from "vite";
import react from "@vitejs/plugin-react";
{% if web == "tanstack-router" %}import { tanstackRouter } from "@tanstack/router-plugin/vite";
{% endif %}
export default defineConfig({
  plugins: [
{% if web == "tanstack-router" %}    tanstackRouter({ target: "react", autoCodeSplitting: true }),
{% endif %}    react(),
  ],
  server: { port: 3001 },
});
"#;

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{ project_name }}</title>
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#;

const REACT_MAIN: &str = r#"import { StrictMode } from "react";
import { createRoot } from "react-dom/client";
{% if web == "tanstack-router" %}import { RouterProvider, createRouter } from "@tanstack/react-router";
import { routeTree } from "./routeTree.gen";

const router = createRouter({ routeTree });

declare module "@tanstack/react-router" {
  interface Register {
    router: typeof router;
  }
}

const app = <RouterProvider router={router} />;
{% else %}import { RouterProvider, createBrowserRouter } from "react-router";
import Home from "./routes/home";

const router = createBrowserRouter([{ path: "/", element: <Home /> }]);

const app = <RouterProvider router={router} />;
{% endif %}
const root = document.getElementById("app");
if (root) {
  createRoot(root).render(<StrictMode>{app}</StrictMode>);
}
"#;

const TANSTACK_ROUTER_ROOT: &str = r#"import { Outlet, createRootRoute } from "@tanstack/react-router";

export const Route = createRootRoute({
  component: () => (
    <main>
      <h1>{{ project_name }}</h1>
      <Outlet />
    </main>
  ),
});
"#;

const REACT_ROUTER_HOME: &str = r#"export default function Home() {
  return <h1>{{ project_name }}</h1>;
}
"#;

const TANSTACK_START_CONFIG: &str = r#"import { defineConfig } from "vite";
import { tanstackStart } from "@tanstack/react-start/plugin/vite";

export default defineConfig({
  plugins: [
    tanstackStart(),
  ],
  server: { port: 3001 },
});
"#;

const TANSTACK_START_ROOT: &str = r#"import { HeadContent, Outlet, Scripts, createRootRoute } from "@tanstack/react-router";

export const Route = createRootRoute({
  head: () => ({ meta: [{ title: "{{ project_name }}" }] }),
  component: () => (
    <html lang="en">
      <head>
        <HeadContent />
      </head>
      <body>
        <Outlet />
        <Scripts />
      </body>
    </html>
  ),
});
"#;

const NEXT_CONFIG: &str = r#"import type { NextConfig } from "next";

const nextConfig: NextConfig = {};

export default nextConfig;
"#;

const NEXT_LAYOUT: &str = r#"import type { ReactNode } from "react";

export const metadata = { title: "{{ project_name }}" };

export default function RootLayout({ children }: { children: ReactNode }) {
  return (
    <html lang="en">
      <body>{children}</body>
    </html>
  );
}
"#;

const NEXT_PAGE: &str = r#"export default function Home() {
  return <h1>{{ project_name }}</h1>;
}
"#;

const NUXT_CONFIG: &str = r#"export default defineNuxtConfig({
  compatibilityDate: "2025-05-01",
  devServer: { port: 3001 },
  modules: [],
});
"#;

const NUXT_APP: &str = r#"<template>
  <main>
    <h1>{{ project_name }}</h1>
    <NuxtPage />
  </main>
</template>
"#;

const SVELTE_CONFIG: &str = r#"import adapter from "@sveltejs/adapter-auto";
import { vitePreprocess } from "@sveltejs/vite-plugin-svelte";

export default {
  preprocess: vitePreprocess(),
  kit: { adapter: adapter() },
};
"#;

const SVELTE_VITE_CONFIG: &str = r#"import { sveltekit } from "@sveltejs/kit/vite";
import { defineConfig } from "vite";

export default defineConfig({
  plugins: [
    sveltekit(),
  ],
  server: { port: 3001 },
});
"#;

const SVELTE_PAGE: &str = r#"<h1>{{ project_name }}</h1>
"#;

const SOLID_VITE_CONFIG: &str = r#"import { defineConfig } from "vite";
import solid from "vite-plugin-solid";

export default defineConfig({
  plugins: [
    solid(),
  ],
  server: { port: 3001 },
});
"#;

const SOLID_INDEX: &str = r#"import { render } from "solid-js/web";
import { Router, Route } from "@solidjs/router";

const Home = () => <h1>{{ project_name }}</h1>;

const root = document.getElementById("app");
if (root) {
  render(() => (
    <Router>
      <Route path="/" component={Home} />
    </Router>
  ), root);
}
"#;

const NATIVE_PACKAGE_JSON: &str = r#"{
  "name": "native",
  "version": "0.0.0",
  "private": true,
  "main": "expo-router/entry"
}
"#;

const NATIVE_APP_JSON: &str = r#"{
  "expo": {
    "name": "{{ project_name }}",
    "slug": "{{ project_name }}",
    "scheme": "{{ project_name }}",
    "plugins": ["expo-router"]
  }
}
"#;

const NATIVEWIND_LAYOUT: &str = r#"import "../global.css";
import { Stack } from "expo-router";

export default function RootLayout() {
  return <Stack />;
}
"#;

const NATIVEWIND_CSS: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;
"#;

const NATIVEWIND_TAILWIND: &str = r#"module.exports = {
  content: ["./app/**/*.{js,jsx,ts,tsx}"],
  presets: [require("nativewind/preset")],
};
"#;

const UNISTYLES_LAYOUT: &str = r#"import "../unistyles";
import { Stack } from "expo-router";

export default function RootLayout() {
  return <Stack />;
}
"#;

const UNISTYLES_CONFIG: &str = r##"import { StyleSheet } from "react-native-unistyles";

const theme = {
  colors: { background: "#ffffff", foreground: "#111111" },
};

StyleSheet.configure({
  themes: { light: theme },
  settings: { initialTheme: "light" },
});
"##;

fn react_vite() -> GeneratorModule {
    GeneratorModule::new("web-react-vite", Category::Frontend, |c| {
        c.web_frontend().is_some_and(|f| f.is_react_vite())
    })
    .creates(Workspace::Web)
    .file(Workspace::Web, "package.json", WEB_PACKAGE_JSON)
    .file(Workspace::Web, "tsconfig.json", WEB_TSCONFIG)
    .file(Workspace::Web, "vite.config.ts", REACT_VITE_CONFIG)
    .file(Workspace::Web, "index.html", INDEX_HTML)
    .file(Workspace::Web, "src/main.tsx", REACT_MAIN)
    .file_when(Workspace::Web, "src/routes/__root.tsx", TANSTACK_ROUTER_ROOT, |c| {
        web_is(c, Frontend::TanstackRouter)
    })
    .file_when(Workspace::Web, "src/routes/home.tsx", REACT_ROUTER_HOME, |c| {
        web_is(c, Frontend::ReactRouter)
    })
    .deps(Workspace::Web, &["react", "react-dom"])
    .deps_when(Workspace::Web, &["@tanstack/react-router"], |c| {
        web_is(c, Frontend::TanstackRouter)
    })
    .deps_when(Workspace::Web, &["react-router"], |c| web_is(c, Frontend::ReactRouter))
    .dev_deps(
        Workspace::Web,
        &["vite", "@vitejs/plugin-react", "typescript", "@types/react", "@types/react-dom"],
    )
    .dev_deps_when(Workspace::Web, &["@tanstack/router-plugin"], |c| {
        web_is(c, Frontend::TanstackRouter)
    })
    .script(Workspace::Web, "dev", "vite")
    .script(Workspace::Web, "build", "vite build")
}

fn tanstack_start() -> GeneratorModule {
    GeneratorModule::new("web-tanstack-start", Category::Frontend, |c| {
        web_is(c, Frontend::TanstackStart)
    })
    .creates(Workspace::Web)
    .file(Workspace::Web, "package.json", WEB_PACKAGE_JSON)
    .file(Workspace::Web, "tsconfig.json", WEB_TSCONFIG)
    .file(Workspace::Web, "vite.config.ts", TANSTACK_START_CONFIG)
    .file(Workspace::Web, "src/routes/__root.tsx", TANSTACK_START_ROOT)
    .deps(
        Workspace::Web,
        &["@tanstack/react-start", "@tanstack/react-router", "react", "react-dom"],
    )
    .dev_deps(Workspace::Web, &["vite", "typescript", "@types/react", "@types/react-dom"])
    .script(Workspace::Web, "dev", "vite dev")
    .script(Workspace::Web, "build", "vite build")
}

fn next() -> GeneratorModule {
    GeneratorModule::new("web-next", Category::Frontend, |c| web_is(c, Frontend::Next))
        .creates(Workspace::Web)
        .file(Workspace::Web, "package.json", WEB_PACKAGE_JSON)
        .file(Workspace::Web, "tsconfig.json", WEB_TSCONFIG)
        .file(Workspace::Web, "next.config.ts", NEXT_CONFIG)
        .file(Workspace::Web, "src/app/layout.tsx", NEXT_LAYOUT)
        .file(Workspace::Web, "src/app/page.tsx", NEXT_PAGE)
        .deps(Workspace::Web, &["next", "react", "react-dom"])
        .dev_deps(Workspace::Web, &["typescript", "@types/react", "@types/react-dom", "@types/node"])
        .script(Workspace::Web, "dev", "next dev --turbopack --port 3001")
        .script(Workspace::Web, "build", "next build")
}

fn nuxt() -> GeneratorModule {
    GeneratorModule::new("web-nuxt", Category::Frontend, |c| web_is(c, Frontend::Nuxt))
        .creates(Workspace::Web)
        .file(Workspace::Web, "package.json", WEB_PACKAGE_JSON)
        .file(Workspace::Web, "nuxt.config.ts", NUXT_CONFIG)
        .file(Workspace::Web, "app.vue", NUXT_APP)
        .deps(Workspace::Web, &["nuxt", "vue"])
        .dev_deps(Workspace::Web, &["typescript"])
        .script(Workspace::Web, "dev", "nuxt dev")
        .script(Workspace::Web, "build", "nuxt build")
}

fn svelte() -> GeneratorModule {
    GeneratorModule::new("web-svelte", Category::Frontend, |c| web_is(c, Frontend::Svelte))
        .creates(Workspace::Web)
        .file(Workspace::Web, "package.json", WEB_PACKAGE_JSON)
        .file(Workspace::Web, "svelte.config.js", SVELTE_CONFIG)
        .file(Workspace::Web, "vite.config.ts", SVELTE_VITE_CONFIG)
        .file(Workspace::Web, "src/routes/+page.svelte", SVELTE_PAGE)
        .dev_deps(
            Workspace::Web,
            &[
                "@sveltejs/kit",
                "@sveltejs/adapter-auto",
                "@sveltejs/vite-plugin-svelte",
                "svelte",
                "vite",
                "typescript",
            ],
        )
        .script(Workspace::Web, "dev", "vite dev")
        .script(Workspace::Web, "build", "vite build")
}

fn solid() -> GeneratorModule {
    GeneratorModule::new("web-solid", Category::Frontend, |c| web_is(c, Frontend::Solid))
        .creates(Workspace::Web)
        .file(Workspace::Web, "package.json", WEB_PACKAGE_JSON)
        .file(Workspace::Web, "tsconfig.json", WEB_TSCONFIG)
        .file(Workspace::Web, "vite.config.ts", SOLID_VITE_CONFIG)
        .file(Workspace::Web, "index.html", INDEX_HTML)
        .file(Workspace::Web, "src/main.tsx", SOLID_INDEX)
        .deps(Workspace::Web, &["solid-js", "@solidjs/router"])
        .dev_deps(Workspace::Web, &["vite", "vite-plugin-solid", "typescript"])
        .script(Workspace::Web, "dev", "vite")
        .script(Workspace::Web, "build", "vite build")
}

fn native(id: &'static str, frontend: Frontend) -> GeneratorModule {
    let applies: Predicate = match frontend {
        Frontend::NativeUnistyles => |c| c.has_frontend(Frontend::NativeUnistyles),
        _ => |c| c.has_frontend(Frontend::NativeNativewind),
    };
    let module = GeneratorModule::new(id, Category::Frontend, applies)
        .creates(Workspace::Native)
        .file(Workspace::Native, "package.json", NATIVE_PACKAGE_JSON)
        .file(Workspace::Native, "app.json", NATIVE_APP_JSON)
        .deps(Workspace::Native, &["expo", "expo-router", "react", "react-native"])
        .dev_deps(Workspace::Native, &["typescript", "@types/react"])
        .script(Workspace::Native, "dev", "expo start")
        .script(Workspace::Native, "android", "expo run:android")
        .script(Workspace::Native, "ios", "expo run:ios");

    match frontend {
        Frontend::NativeUnistyles => module
            .file(Workspace::Native, "app/_layout.tsx", UNISTYLES_LAYOUT)
            .file(Workspace::Native, "unistyles.ts", UNISTYLES_CONFIG)
            .deps(Workspace::Native, &["react-native-unistyles"]),
        _ => module
            .file(Workspace::Native, "app/_layout.tsx", NATIVEWIND_LAYOUT)
            .file(Workspace::Native, "global.css", NATIVEWIND_CSS)
            .file(Workspace::Native, "tailwind.config.js", NATIVEWIND_TAILWIND)
            .deps(Workspace::Native, &["nativewind"])
            .dev_deps(Workspace::Native, &["tailwindcss"]),
    }
}

pub(super) fn modules() -> Vec<GeneratorModule> {
    vec![
        react_vite(),
        tanstack_start(),
        next(),
        nuxt(),
        svelte(),
        solid(),
        native("native-nativewind", Frontend::NativeNativewind),
        native("native-unistyles", Frontend::NativeUnistyles),
    ]
}
