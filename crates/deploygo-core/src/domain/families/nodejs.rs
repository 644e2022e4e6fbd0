use crate::domain::{
    entities::{file_set::FileSet, project_config::ProjectConfig},
    families::shared,
};

const EXPRESS_VERSION: &str = "4.18.2";

const DOCKERFILE_TEMPLATE: &str = r#"# syntax=docker/dockerfile:1
FROM node:18-alpine
ENV NODE_ENV=production
WORKDIR /app
COPY package*.json ./
RUN npm install --omit=dev
COPY . .
USER node
ENV PORT={{port}}
EXPOSE {{port}}
CMD ["node", "app.js"]
"#;

const APP_TEMPLATE: &str = r#"const express = require("express");

const app = express();
const port = process.env.PORT || {{port}};

app.get("/", (req, res) => {
  res.json({ service: "{{project_name}}", version: "{{version}}" });
});

app.get("/health", (req, res) => {
  res.sendStatus(200);
});

app.listen(port, () => {
  console.log(`{{project_name}} listening on port ${port}`);
});
"#;

fn package_json(config: &ProjectConfig) -> String {
    format!(
        r#"{{
  "name": "{name}",
  "version": "{{{{version}}}}",
  "description": "{{{{project_name}}}} service",
  "main": "app.js",
  "private": true,
  "scripts": {{
    "start": "node app.js"
  }},
  "dependencies": {{
    "express": "{EXPRESS_VERSION}"
  }}
}}
"#,
        name = config.project_name().slug(),
    )
}

pub fn build(config: &ProjectConfig) -> FileSet {
    FileSet::new()
        .with_file(shared::DOCKERFILE, DOCKERFILE_TEMPLATE)
        .with_file(shared::COMPOSE, shared::COMPOSE_TEMPLATE)
        .with_file(shared::DEPLOY_CONFIG, shared::DEPLOY_CONFIG_TEMPLATE)
        .with_file("package.json", package_json(config))
        .with_file("app.js", APP_TEMPLATE)
        .with_file(
            shared::DOCKERIGNORE,
            shared::dockerignore(&["node_modules", "npm-debug.log"]),
        )
}
