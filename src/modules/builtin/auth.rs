use super::{has_react_web, has_web, web_is};
use crate::domain::value_objects::{Auth, Backend, Frontend, Orm, Workspace};
use crate::modules::{Category, GeneratorModule};

const BETTER_AUTH_SERVER: &str = r#"import { betterAuth } from "better-auth";
{% if config.orm == "drizzle" %}import { drizzleAdapter } from "better-auth/adapters/drizzle";
import { db } from "../db";
import * as schema from "../db/schema/auth";
{% elif config.orm == "prisma" %}import { prismaAdapter } from "better-auth/adapters/prisma";
import { prisma } from "../db";
{% elif config.orm == "mongoose" %}import { mongodbAdapter } from "better-auth/adapters/mongodb";
import { client } from "../db";
{% endif %}
export const auth = betterAuth({
{% if config.orm == "drizzle" %}  database: drizzleAdapter(db, {
    provider: "{% if config.database == "postgres" %}pg{% elif config.database == "mysql" %}mysql{% else %}sqlite{% endif %}",
    schema,
  }),
{% elif config.orm == "prisma" %}  database: prismaAdapter(prisma, { provider: "{% if config.database == "postgres" %}postgresql{% else %}{{ config.database }}{% endif %}" }),
{% elif config.orm == "mongoose" %}  database: mongodbAdapter(client),
{% endif %}  trustedOrigins: [process.env.CORS_ORIGIN || ""],
  emailAndPassword: { enabled: true },
});
"#;

const BETTER_AUTH_SCHEMA: &str = r#"{% if config.database == "postgres" %}import { boolean, pgTable, text, timestamp } from "drizzle-orm/pg-core";

export const user = pgTable("user", {
  id: text("id").primaryKey(),
  name: text("name").notNull(),
  email: text("email").notNull().unique(),
  emailVerified: boolean("email_verified").notNull(),
  createdAt: timestamp("created_at").notNull(),
  updatedAt: timestamp("updated_at").notNull(),
});

export const session = pgTable("session", {
  id: text("id").primaryKey(),
  token: text("token").notNull().unique(),
  expiresAt: timestamp("expires_at").notNull(),
  userId: text("user_id").notNull().references(() => user.id, { onDelete: "cascade" }),
});
{% elif config.database == "mysql" %}import { boolean, mysqlTable, timestamp, varchar } from "drizzle-orm/mysql-core";

export const user = mysqlTable("user", {
  id: varchar("id", { length: 36 }).primaryKey(),
  name: varchar("name", { length: 255 }).notNull(),
  email: varchar("email", { length: 255 }).notNull().unique(),
  emailVerified: boolean("email_verified").notNull(),
  createdAt: timestamp("created_at").notNull(),
  updatedAt: timestamp("updated_at").notNull(),
});

export const session = mysqlTable("session", {
  id: varchar("id", { length: 36 }).primaryKey(),
  token: varchar("token", { length: 255 }).notNull().unique(),
  expiresAt: timestamp("expires_at").notNull(),
  userId: varchar("user_id", { length: 36 }).notNull().references(() => user.id, { onDelete: "cascade" }),
});
{% else %}import { integer, sqliteTable, text } from "drizzle-orm/sqlite-core";

export const user = sqliteTable("user", {
  id: text("id").primaryKey(),
  name: text("name").notNull(),
  email: text("email").notNull().unique(),
  emailVerified: integer("email_verified", { mode: "boolean" }).notNull(),
  createdAt: integer("created_at", { mode: "timestamp" }).notNull(),
  updatedAt: integer("updated_at", { mode: "timestamp" }).notNull(),
});

export const session = sqliteTable("session", {
  id: text("id").primaryKey(),
  token: text("token").notNull().unique(),
  expiresAt: integer("expires_at", { mode: "timestamp" }).notNull(),
  userId: text("user_id").notNull().references(() => user.id, { onDelete: "cascade" }),
});
{% endif %}"#;

const BETTER_AUTH_CLIENT: &str = r#"import { createAuthClient } from "better-auth/{% if web == "svelte" %}svelte{% elif web == "solid" %}solid{% elif web == "nuxt" %}vue{% else %}react{% endif %}";

export const authClient = createAuthClient({
  baseURL: import.meta.env.VITE_SERVER_URL,
});
"#;

const CLERK_CONVEX_CONFIG: &str = r#"export default {
  providers: [
    {
      domain: process.env.CLERK_JWT_ISSUER_DOMAIN,
      applicationID: "convex",
    },
  ],
};
"#;

const CLERK_MIDDLEWARE: &str = r#"import { clerkMiddleware } from "@clerk/nextjs/server";

export default clerkMiddleware();

export const config = {
  matcher: ["/((?!_next|[^?]*\\.(?:html?|css|js|jpe?g|webp|png|gif|svg|ico|woff2?)).*)", "/(api|trpc)(.*)"],
};
"#;

fn better_auth() -> GeneratorModule {
    GeneratorModule::new("auth-better-auth", Category::Auth, |c| c.auth == Auth::BetterAuth)
        .file(Workspace::Server, "src/lib/auth.ts", BETTER_AUTH_SERVER)
        .file_when(Workspace::Server, "src/db/schema/auth.ts", BETTER_AUTH_SCHEMA, |c| {
            c.orm == Orm::Drizzle
        })
        .file_when(Workspace::Web, "src/lib/auth-client.ts", BETTER_AUTH_CLIENT, |c| {
            has_web(c) && !web_is(c, Frontend::Next)
        })
        .deps(Workspace::Server, &["better-auth"])
        .deps_when(Workspace::Web, &["better-auth"], has_web)
        .env(Workspace::Server, "BETTER_AUTH_SECRET", "")
        .env(Workspace::Server, "BETTER_AUTH_URL", "http://localhost:3000")
}

fn clerk() -> GeneratorModule {
    GeneratorModule::new("auth-clerk", Category::Auth, |c| c.auth == Auth::Clerk)
        .file_when(Workspace::Server, "convex/auth.config.ts", CLERK_CONVEX_CONFIG, |c| {
            c.backend == Backend::Convex
        })
        .file_when(Workspace::Web, "src/middleware.ts", CLERK_MIDDLEWARE, |c| {
            web_is(c, Frontend::Next)
        })
        .deps_when(Workspace::Web, &["@clerk/nextjs"], |c| web_is(c, Frontend::Next))
        .deps_when(Workspace::Web, &["@clerk/clerk-react"], |c| {
            has_react_web(c) && !web_is(c, Frontend::Next)
        })
        .env_when(Workspace::Web, "VITE_CLERK_PUBLISHABLE_KEY", "", |c| {
            has_web(c) && !web_is(c, Frontend::Next)
        })
        .env_when(Workspace::Web, "NEXT_PUBLIC_CLERK_PUBLISHABLE_KEY", "", |c| {
            web_is(c, Frontend::Next)
        })
        .env_when(Workspace::Server, "CLERK_JWT_ISSUER_DOMAIN", "", |c| {
            c.backend == Backend::Convex
        })
}

pub(super) fn modules() -> Vec<GeneratorModule> {
    vec![better_auth(), clerk()]
}
