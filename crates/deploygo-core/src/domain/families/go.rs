use crate::domain::{
    entities::{file_set::FileSet, project_config::ProjectConfig},
    families::shared,
};

const GO_VERSION: &str = "1.21";

const DOCKERFILE_TEMPLATE: &str = r#"# syntax=docker/dockerfile:1
FROM golang:1.21-alpine AS builder
WORKDIR /src
COPY go.mod ./
RUN go mod download
COPY . .
RUN CGO_ENABLED=0 GOOS=linux go build -trimpath -ldflags="-s -w" -o /out/server .

FROM alpine:3.19
RUN adduser -D -u 10001 app
USER app
WORKDIR /app
COPY --from=builder /out/server ./server
ENV PORT={{port}}
EXPOSE {{port}}
CMD ["./server"]
"#;

const MAIN_TEMPLATE: &str = r#"package main

import (
	"encoding/json"
	"log"
	"net/http"
	"os"
)

func main() {
	port := os.Getenv("PORT")
	if port == "" {
		port = "{{port}}"
	}

	mux := http.NewServeMux()
	mux.HandleFunc("/", func(w http.ResponseWriter, r *http.Request) {
		w.Header().Set("Content-Type", "application/json")
		json.NewEncoder(w).Encode(map[string]string{
			"service": "{{project_name}}",
			"version": "{{version}}",
		})
	})
	mux.HandleFunc("/health", func(w http.ResponseWriter, r *http.Request) {
		w.WriteHeader(http.StatusOK)
	})

	log.Printf("{{project_name}} listening on :%s", port)
	log.Fatal(http.ListenAndServe(":"+port, mux))
}
"#;

pub fn build(config: &ProjectConfig) -> FileSet {
    FileSet::new()
        .with_file(shared::DOCKERFILE, DOCKERFILE_TEMPLATE)
        .with_file(shared::COMPOSE, shared::COMPOSE_TEMPLATE)
        .with_file(shared::DEPLOY_CONFIG, shared::DEPLOY_CONFIG_TEMPLATE)
        .with_file(
            "go.mod",
            format!(
                "module {}\n\ngo {GO_VERSION}\n",
                config.project_name().slug()
            ),
        )
        .with_file("main.go", MAIN_TEMPLATE)
        .with_file(shared::DOCKERIGNORE, shared::dockerignore(&["bin/", "*.test"]))
}
