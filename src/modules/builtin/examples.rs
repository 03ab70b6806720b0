use super::{has_react_web, web_is};
use crate::domain::value_objects::{Api, Backend, Example, Frontend, Workspace};
use crate::modules::{Category, GeneratorModule};

const TODO_ROUTER: &str = r#"import { z } from "zod";
{% if config.api == "trpc" %}import { publicProcedure, router } from "./index";
{% else %}import { publicProcedure } from "./index";
{% endif %}{% if config.orm == "drizzle" %}import { eq } from "drizzle-orm";
import { db } from "../db";
import { todo } from "../db/schema";
{% elif config.orm == "prisma" %}import { prisma } from "../db";
{% endif %}
const list = async () => {
{% if config.orm == "drizzle" %}  return db.select().from(todo);
{% elif config.orm == "prisma" %}  return prisma.todo.findMany();
{% else %}  return [];
{% endif %}};

const create = async (text: string) => {
{% if config.orm == "drizzle" %}  return db.insert(todo).values({ text });
{% elif config.orm == "prisma" %}  return prisma.todo.create({ data: { text } });
{% else %}  return { text };
{% endif %}};

const toggle = async (id: number, completed: boolean) => {
{% if config.orm == "drizzle" %}  return db.update(todo).set({ completed }).where(eq(todo.id, id));
{% elif config.orm == "prisma" %}  return prisma.todo.update({ where: { id }, data: { completed } });
{% else %}  return { id, completed };
{% endif %}};

{% if config.api == "trpc" %}export const todoRouter = router({
  getAll: publicProcedure.query(() => list()),
  create: publicProcedure
    .input(z.object({ text: z.string().min(1) }))
    .mutation(({ input }) => create(input.text)),
  toggle: publicProcedure
    .input(z.object({ id: z.number(), completed: z.boolean() }))
    .mutation(({ input }) => toggle(input.id, input.completed)),
});
{% else %}export const todoRouter = {
  getAll: publicProcedure.handler(() => list()),
  create: publicProcedure
    .input(z.object({ text: z.string().min(1) }))
    .handler(({ input }) => create(input.text)),
  toggle: publicProcedure
    .input(z.object({ id: z.number(), completed: z.boolean() }))
    .handler(({ input }) => toggle(input.id, input.completed)),
};
{% endif %}"#;

const CONVEX_TODOS: &str = r#"import { v } from "convex/values";
import { mutation, query } from "./_generated/server";

export const getAll = query({
  handler: async (ctx) => ctx.db.query("todos").collect(),
});

export const create = mutation({
  args: { text: v.string() },
  handler: async (ctx, args) => ctx.db.insert("todos", { text: args.text, completed: false }),
});

export const toggle = mutation({
  args: { id: v.id("todos"), completed: v.boolean() },
  handler: async (ctx, args) => ctx.db.patch(args.id, { completed: args.completed }),
});
"#;

const TODO_ROUTE: &str = r#"import { createFileRoute } from "@tanstack/react-router";
import { useState } from "react";

export const Route = createFileRoute("/todos")({
  component: TodosRoute,
});

function TodosRoute() {
  const [text, setText] = useState("");

  return (
    <div className="mx-auto max-w-md py-10">
      <h1 className="mb-4 text-2xl font-bold">Todos</h1>
      <input value={text} onChange={(e) => setText(e.target.value)} placeholder="Add a task" />
    </div>
  );
}
"#;

const AI_ROUTE: &str = r#"import { google } from "@ai-sdk/google";
import { streamText } from "ai";

export async function chat(request: Request) {
  const { messages } = await request.json();

  const result = streamText({
    model: google("gemini-1.5-flash"),
    messages,
  });

  return result.toDataStreamResponse();
}
"#;

const AI_PAGE: &str = r#"import { useChat } from "@ai-sdk/react";

export function Chat() {
  const { messages, input, handleInputChange, handleSubmit } = useChat({
    api: `${import.meta.env.VITE_SERVER_URL}/ai`,
  });

  return (
    <form onSubmit={handleSubmit}>
      {messages.map((m) => (
        <p key={m.id}>{m.content}</p>
      ))}
      <input value={input} onChange={handleInputChange} />
    </form>
  );
}
"#;

fn todo() -> GeneratorModule {
    GeneratorModule::new("example-todo", Category::Examples, |c| {
        c.has_example(Example::Todo)
    })
    .file_when(Workspace::Server, "src/routers/todo.ts", TODO_ROUTER, |c| {
        c.api != Api::None && c.backend != Backend::Convex
    })
    .file_when(Workspace::Server, "convex/todos.ts", CONVEX_TODOS, |c| {
        c.backend == Backend::Convex
    })
    .file_when(Workspace::Web, "src/routes/todos.tsx", TODO_ROUTE, |c| {
        web_is(c, Frontend::TanstackRouter)
    })
}

fn ai() -> GeneratorModule {
    GeneratorModule::new("example-ai", Category::Examples, |c| c.has_example(Example::Ai))
        .file_when(Workspace::Server, "src/lib/ai.ts", AI_ROUTE, |c| {
            c.backend.needs_runtime()
        })
        .file_when(Workspace::Web, "src/components/chat.tsx", AI_PAGE, has_react_web)
        .deps_when(Workspace::Server, &["ai", "@ai-sdk/google"], |c| c.backend.needs_runtime())
        .deps_when(Workspace::Web, &["@ai-sdk/react"], has_react_web)
        .env_when(Workspace::Server, "GOOGLE_GENERATIVE_AI_API_KEY", "", |c| {
            c.backend.needs_runtime()
        })
}

pub(super) fn modules() -> Vec<GeneratorModule> {
    vec![todo(), ai()]
}
