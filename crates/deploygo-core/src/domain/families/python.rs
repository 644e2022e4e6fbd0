use crate::domain::{
    entities::{file_set::FileSet, project_config::ProjectConfig},
    families::shared,
};

const REQUIREMENTS: &str = "flask==2.3.3\ngunicorn==21.2.0\n";

const DOCKERFILE_TEMPLATE: &str = r#"# syntax=docker/dockerfile:1
FROM python:3.11-slim
ENV PYTHONDONTWRITEBYTECODE=1 \
    PYTHONUNBUFFERED=1
WORKDIR /app
COPY requirements.txt ./
RUN pip install --no-cache-dir -r requirements.txt
COPY . .
RUN useradd --create-home app
USER app
ENV PORT={{port}}
EXPOSE {{port}}
CMD ["sh", "-c", "gunicorn --bind 0.0.0.0:${PORT} app:app"]
"#;

const APP_TEMPLATE: &str = r#"import os

from flask import Flask, jsonify

app = Flask(__name__)


@app.route("/")
def index():
    return jsonify(service="{{project_name}}", version="{{version}}")


@app.route("/health")
def health():
    return "", 200


if __name__ == "__main__":
    port = int(os.environ.get("PORT", "{{port}}"))
    app.run(host="0.0.0.0", port=port)
"#;

pub fn build(_config: &ProjectConfig) -> FileSet {
    FileSet::new()
        .with_file(shared::DOCKERFILE, DOCKERFILE_TEMPLATE)
        .with_file(shared::COMPOSE, shared::COMPOSE_TEMPLATE)
        .with_file(shared::DEPLOY_CONFIG, shared::DEPLOY_CONFIG_TEMPLATE)
        .with_file("requirements.txt", REQUIREMENTS)
        .with_file("app.py", APP_TEMPLATE)
        .with_file(
            shared::DOCKERIGNORE,
            shared::dockerignore(&["__pycache__", "*.pyc", ".venv", "venv"]),
        )
}
