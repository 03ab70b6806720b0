use super::{has_native, has_react_web, has_web};
use crate::domain::value_objects::{Api, Frontend, Workspace};
use crate::modules::{Category, GeneratorModule};

const TRPC_SERVER: &str = r#"import { initTRPC } from "@trpc/server";
{% if "todo" in config.examples %}import { todoRouter } from "./todo";
{% endif %}
const t = initTRPC.create();

export const router = t.router;
export const publicProcedure = t.procedure;

export const appRouter = router({
  healthCheck: publicProcedure.query(() => "OK"),
{% if "todo" in config.examples %}  todo: todoRouter,
{% endif %}});

export type AppRouter = typeof appRouter;
"#;

const TRPC_CLIENT: &str = r#"import { QueryClient } from "@tanstack/react-query";
import { createTRPCClient, httpBatchLink } from "@trpc/client";
import { createTRPCOptionsProxy } from "@trpc/tanstack-react-query";
import type { AppRouter } from "../../../server/src/routers";

export const queryClient = new QueryClient();

const trpcClient = createTRPCClient<AppRouter>({
  links: [httpBatchLink({ url: `${import.meta.env.VITE_SERVER_URL}/trpc` })],
});

export const trpc = createTRPCOptionsProxy<AppRouter>({ client: trpcClient, queryClient });
"#;

const ORPC_SERVER: &str = r#"import { os } from "@orpc/server";
{% if "todo" in config.examples %}import { todoRouter } from "./todo";
{% endif %}
export const publicProcedure = os;

export const appRouter = {
  healthCheck: publicProcedure.handler(() => "OK"),
{% if "todo" in config.examples %}  todo: todoRouter,
{% endif %}};

export type AppRouter = typeof appRouter;
"#;

const ORPC_CLIENT: &str = r#"import { createORPCClient } from "@orpc/client";
import { RPCLink } from "@orpc/client/fetch";
import { createTanstackQueryUtils } from "@orpc/tanstack-query";
import type { AppRouter } from "../../../server/src/routers";

const link = new RPCLink({ url: `${import.meta.env.VITE_SERVER_URL}/rpc` });

export const client = createORPCClient<AppRouter>(link);
export const orpc = createTanstackQueryUtils(client);
"#;

fn trpc() -> GeneratorModule {
    GeneratorModule::new("api-trpc", Category::Api, |c| c.api == Api::Trpc)
        .file(Workspace::Server, "src/routers/index.ts", TRPC_SERVER)
        .file_when(Workspace::Web, "src/utils/trpc.ts", TRPC_CLIENT, has_react_web)
        .deps(Workspace::Server, &["@trpc/server", "zod"])
        .deps_when(
            Workspace::Web,
            &["@trpc/client", "@trpc/tanstack-react-query", "@tanstack/react-query"],
            has_react_web,
        )
        .deps_when(Workspace::Native, &["@trpc/client", "@tanstack/react-query"], has_native)
        .env_when(Workspace::Web, "VITE_SERVER_URL", "http://localhost:3000", has_web)
}

fn orpc() -> GeneratorModule {
    GeneratorModule::new("api-orpc", Category::Api, |c| c.api == Api::Orpc)
        .file(Workspace::Server, "src/routers/index.ts", ORPC_SERVER)
        .file_when(Workspace::Web, "src/utils/orpc.ts", ORPC_CLIENT, |c| {
            has_web(c) && c.web_frontend() != Some(Frontend::Nuxt)
        })
        .deps(Workspace::Server, &["@orpc/server", "zod"])
        .deps_when(Workspace::Web, &["@orpc/client", "@orpc/tanstack-query"], has_web)
        .deps_when(Workspace::Native, &["@orpc/client", "@orpc/tanstack-query"], has_native)
        .env_when(Workspace::Web, "VITE_SERVER_URL", "http://localhost:3000", has_web)
}

pub(super) fn modules() -> Vec<GeneratorModule> {
    vec![trpc(), orpc()]
}
