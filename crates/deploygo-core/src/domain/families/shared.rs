//! Files every family ships with the same shape.
//!
//! Placeholders: `{{project_name}}`, `{{project_slug}}`, `{{language}}`,
//! `{{port}}`, `{{version}}`. They are resolved by the write engine, not here.
//! Docker service keys and image references take the slug.

pub const DOCKERFILE: &str = "Dockerfile";
pub const COMPOSE: &str = "docker-compose.yml";
pub const DEPLOY_CONFIG: &str = ".deploygo.yml";
pub const DOCKERIGNORE: &str = ".dockerignore";

pub const COMPOSE_TEMPLATE: &str = r#"services:
  {{project_slug}}:
    build:
      context: .
      dockerfile: Dockerfile
    image: {{project_slug}}:{{version}}
    ports:
      - "{{port}}:{{port}}"
    environment:
      - PORT={{port}}
    restart: unless-stopped
"#;

pub const DEPLOY_CONFIG_TEMPLATE: &str = r#"project:
  name: {{project_name}}
  language: {{language}}
  version: {{version}}

build:
  dockerfile: Dockerfile
  context: .
  tag: {{project_slug}}:{{version}}

environments:
  staging:
    port: {{port}}
    replicas: 1
  production:
    port: {{port}}
    replicas: 2

healthcheck:
  path: /health
  interval: 30s
"#;

const DOCKERIGNORE_COMMON: &str = "\
.git
.gitignore
.deploygo.yml
docker-compose.yml
Dockerfile
.dockerignore
*.md
.env
";

/// Build-context exclusions: the shared list plus runtime-specific entries.
pub fn dockerignore(extra: &[&str]) -> String {
    let mut out = String::from(DOCKERIGNORE_COMMON);
    for line in extra {
        out.push_str(line);
        out.push('\n');
    }
    out
}
