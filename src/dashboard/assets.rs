//! Embedded dashboard assets.
//!
//! The dashboard is a single static shell plus three scripts: the
//! in-browser Deploy API client, the code editor widget, and the page
//! wiring. Everything ships inside the binary as string consts.

/// The dashboard HTML shell.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en-US">
  <head>
    <meta charset="utf-8" />
    <title>Deploy Client</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/prism/1.24.1/themes/prism-dark.min.css" />
    <link rel="stylesheet" href="/style.css" />
    <script src="/deploy_api.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/prism/1.24.1/prism.min.js"></script>
    <script type="module" src="/codejar.js"></script>
  </head>
  <body>
    <div id="app">
      <div id="sidebar"></div>
      <div id="editor"></div>
    </div>
    <script src="/client.js"></script>
  </body>
</html>
"#;

/// Dashboard stylesheet.
pub const STYLE_CSS: &str = r#"* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html,
body {
  height: 100%;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  background: #1a1a2e;
  color: #eee;
}

#app {
  display: flex;
  height: 100%;
}

#sidebar {
  width: 280px;
  overflow-y: auto;
  background: #16213e;
  border-right: 1px solid #0f3460;
  padding: 12px;
}

#sidebar .project {
  padding: 8px 10px;
  border-radius: 4px;
  cursor: pointer;
}

#sidebar .project:hover,
#sidebar .project.active {
  background: #0f3460;
}

#editor {
  flex: 1;
  overflow: auto;
  padding: 16px;
  font-family: "SF Mono", Menlo, Consolas, monospace;
  font-size: 14px;
  white-space: pre;
}
"#;

/// In-browser copy of the Deploy API client.
pub const DEPLOY_API_JS: &str = r#"const API_BASE = "https://dash.deno.com/api";

function transformDate(obj, ...props) {
  for (const prop of props) {
    if (obj[prop]) obj[prop] = new Date(obj[prop]);
  }
  return obj;
}

function transformDeployment(d) {
  d = transformDate(d, "createdAt", "updatedAt");
  if (d.domainMappings) {
    d.domainMappings = d.domainMappings.map((e) =>
      transformDate(e, "createdAt", "updatedAt")
    );
  }
  return d;
}

function transformProject(d) {
  d = transformDate(d, "createdAt", "updatedAt");
  if (d.git) d.git = transformDate(d.git, "createdAt", "updatedAt");
  if (d.productionDeployment) {
    d.productionDeployment = transformDeployment(d.productionDeployment);
  }
  return d;
}

const decoder = new TextDecoder();

class DeployClient {
  constructor(token) {
    this.token = token;
  }

  async request(method, path, options = {}) {
    const headers = {
      Authorization: `Bearer ${this.token}`,
      Accept: "application/json",
    };
    const body =
      options.body === undefined ? undefined : JSON.stringify(options.body);
    if (body !== undefined) headers["Content-Type"] = "application/json";

    const res = await fetch(`${API_BASE}${path}`, { method, headers, body });
    if (options.stream) return res.body;

    const json = await res.json();
    let error;
    if (res.status === 400) error = "Bad Request";
    else if (res.status === 401) error = "Unauthorized";
    else if (res.status === 403) error = "Forbidden";
    else if (res.status === 429) error = "Rate Limited";
    else if (res.status >= 400 && res.status < 500) error = "Client Error";
    else if (res.status >= 500 && res.status < 600) error = "Server Error";
    if (error) throw new Error(`${error}: ${JSON.stringify(json, null, 2)}`);
    return json;
  }

  async fetchUser() {
    return transformDate(
      await this.request("GET", "/user"),
      "createdAt",
      "updatedAt"
    );
  }

  async fetchProjects() {
    return (await this.request("GET", "/projects")).map(transformProject);
  }

  async fetchProject(id) {
    return transformProject(await this.request("GET", `/projects/${id}`));
  }

  async fetchDeployments(id, options = { page: 0, limit: 20 }) {
    const res = await this.request(
      "GET",
      `/projects/${id}/deployments?page=${options.page}&limit=${options.limit}`
    );
    return res.map(transformDeployment);
  }

  async fetchAnalytics(project, interval = "24h") {
    const res = await this.request(
      "GET",
      `/projects/${project}/analytics?interval=${interval}`
    );
    res.stats = res.stats.map((e) => {
      e.projectId = e.project_id;
      delete e.project_id;
      e.requestCount = e.request_count;
      delete e.request_count;
      e.ts = new Date(e.ts);
      return e;
    });
    return res;
  }

  async createProject(name, envVars = {}) {
    return transformProject(
      await this.request("POST", "/projects", { body: { name, envVars } })
    );
  }

  async deleteProject(id) {
    await this.request("DELETE", `/projects/${id}`);
  }

  async editProject(id, what = {}) {
    await this.request("PATCH", `/projects/${id}`, { body: what });
  }

  async deploy(id, url, production = true) {
    const stream = await this.request(
      "POST",
      `/projects/${id}/deployments_stream`,
      { body: { url, production }, stream: true }
    );
    return new ReadableStream({
      async start(controller) {
        for await (const chunk of stream) {
          try {
            let json = JSON.parse(decoder.decode(chunk));
            if (json.type == "success") json = transformDeployment(json);
            controller.enqueue(json);
          } catch (e) {
            // chunk did not hold one complete JSON document; skip it
          }
        }
        controller.close();
      },
    });
  }
}

window.DeployClient = DeployClient;
"#;

/// Code editor widget loader.
pub const CODEJAR_JS: &str = r#"import { CodeJar } from "https://cdn.jsdelivr.net/npm/codejar@3.7.0/dist/codejar.min.js";

window.CodeJar = CodeJar;
window.dispatchEvent(new Event("codejar-ready"));
"#;

/// Page wiring: token handling, project list, editor pane.
pub const CLIENT_JS: &str = r#"(function () {
  const sidebar = document.getElementById("sidebar");
  const editor = document.getElementById("editor");

  let token = localStorage.getItem("deployToken");
  if (!token) {
    token = prompt("Deploy API access token:");
    if (token) localStorage.setItem("deployToken", token);
  }
  const client = new DeployClient(token);

  function show(value) {
    editor.textContent = JSON.stringify(value, null, 2);
    if (window.Prism) {
      editor.innerHTML = Prism.highlight(
        editor.textContent,
        Prism.languages.json || Prism.languages.javascript,
        "json"
      );
    }
  }

  async function openProject(project, el) {
    for (const node of sidebar.querySelectorAll(".project")) {
      node.classList.remove("active");
    }
    el.classList.add("active");
    show(await client.fetchProject(project.id));
  }

  async function init() {
    try {
      const projects = await client.fetchProjects();
      for (const project of projects) {
        const el = document.createElement("div");
        el.className = "project";
        el.textContent = project.name;
        el.onclick = () => openProject(project, el).catch((e) => show(String(e)));
        sidebar.appendChild(el);
      }
    } catch (e) {
      show(String(e));
    }
  }

  init();
})();
"#;
