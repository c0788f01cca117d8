//! Single-page editor UI served at `/`.

use crate::render::EXPORT_CSS;

const PREVIEW_CSS_SLOT: &str = "/*PREVIEW_CSS*/";

/// The editor page with the preview style sheet filled in.
pub fn build_index_html() -> String {
    INDEX_HTML.replace(PREVIEW_CSS_SLOT, EXPORT_CSS)
}

const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>UI Sketch</title>
  <style>
    #output {
/*PREVIEW_CSS*/
    }
    :root {
      --bg: #f1f5f9;
      --panel: #ffffff;
      --line: #e2e8f0;
      --text: #0f172a;
      --muted: #64748b;
      --accent: #2563eb;
    }
    body.dark {
      --bg: #0b1120;
      --panel: #111827;
      --line: #1f2937;
      --text: #e5e7eb;
      --muted: #94a3b8;
    }
    * { box-sizing: border-box; }
    html, body { margin: 0; background: var(--bg); color: var(--text); font-family: system-ui, sans-serif; }
    header.bar { display: flex; align-items: center; gap: 12px; padding: 12px 20px; border-bottom: 1px solid var(--line); background: var(--panel); }
    header.bar h1 { font-size: 18px; margin: 0; flex: 1; }
    main { display: grid; grid-template-columns: 1fr 320px; gap: 16px; padding: 16px 20px; }
    .panel { background: var(--panel); border: 1px solid var(--line); border-radius: 10px; padding: 14px; }
    textarea#prompt { width: 100%; min-height: 72px; resize: vertical; padding: 10px; border-radius: 8px; border: 1px solid var(--line); background: var(--bg); color: var(--text); font: inherit; }
    .controls { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 10px; align-items: center; }
    .controls button, #editor button { padding: 8px 12px; border-radius: 8px; border: 1px solid var(--line); background: var(--bg); color: var(--text); cursor: pointer; }
    .controls button.primary { background: var(--accent); border-color: var(--accent); color: #fff; }
    button:disabled { opacity: 0.5; cursor: not-allowed; }
    #status { color: var(--muted); min-height: 1.2em; margin-top: 8px; font-size: 14px; }
    #status.error { color: #dc2626; }
    #output { margin-top: 14px; }
    #output .node { position: relative; outline: 1px dashed transparent; border-radius: 8px; cursor: pointer; }
    #output .node:hover { outline-color: var(--accent); }
    #output .node.selected { outline: 2px solid var(--accent); }
    #output pre { white-space: pre-wrap; background: var(--bg); padding: 12px; border-radius: 8px; overflow: auto; }
    #editor h3 { margin: 0 0 10px; font-size: 15px; }
    #editor .prop { margin-bottom: 10px; }
    #editor .prop label { display: block; font-size: 12px; color: var(--muted); margin-bottom: 4px; }
    #editor .prop input { width: 100%; padding: 6px 8px; border-radius: 6px; border: 1px solid var(--line); background: var(--bg); color: var(--text); }
    #editor .row { display: flex; gap: 6px; margin-top: 12px; }
    #editor .danger { color: #dc2626; }
    .empty { color: var(--muted); font-size: 14px; }
  </style>
</head>
<body>
  <header class="bar">
    <h1>UI Sketch</h1>
    <button id="theme-toggle" type="button">Toggle theme</button>
  </header>
  <main>
    <section class="panel">
      <textarea id="prompt" placeholder="Describe a UI, e.g. &quot;Landing page with navbar, 3 pricing plans and a footer&quot;"></textarea>
      <div class="controls">
        <button id="generate" class="primary" type="button">Generate</button>
        <button id="clear" type="button">Clear</button>
        <button id="export" type="button">Export HTML</button>
        <label>Output
          <select id="mode">
            <option value="preview">Preview</option>
            <option value="html">HTML</option>
            <option value="jsx">JSX</option>
          </select>
        </label>
      </div>
      <div id="status"></div>
      <div id="output"></div>
    </section>
    <aside class="panel" id="editor">
      <p class="empty">Click a component in the preview to edit its properties.</p>
    </aside>
  </main>
  <script>
    const THEME_KEY = 'uisketch-theme';
    const $ = (id) => document.getElementById(id);
    let current = null;
    let selected = null;
    let pending = false;

    function setStatus(text, isError) {
      const el = $('status');
      el.textContent = text || '';
      el.classList.toggle('error', !!isError);
    }

    function setPending(value) {
      pending = value;
      ['generate', 'clear', 'export'].forEach((id) => { $(id).disabled = value; });
    }

    async function api(method, url, body) {
      const opts = { method, headers: {} };
      if (body !== undefined) {
        opts.headers['Content-Type'] = 'application/json';
        opts.body = JSON.stringify(body);
      }
      const res = await fetch(url, opts);
      const data = await res.json().catch(() => ({}));
      if (!res.ok) {
        const message = data.error ? data.error.message : ('Request failed: ' + res.status);
        throw new Error(message);
      }
      return data;
    }

    function show(view) {
      current = view;
      $('mode').value = view.mode;
      setStatus(view.status);
      const out = $('output');
      out.innerHTML = '';
      if (view.mode === 'preview') {
        out.innerHTML = view.output;
      } else {
        const pre = document.createElement('pre');
        pre.textContent = view.output;
        out.appendChild(pre);
      }
      if (selected !== null && selected >= view.document.components.length) {
        selected = null;
      }
      markSelected();
      if (selected === null) {
        renderEditor(null, null);
      }
    }

    function markSelected() {
      document.querySelectorAll('#output .node').forEach((el) => {
        el.classList.toggle('selected', Number(el.dataset.nodeIndex) === selected);
      });
    }

    function displayValue(value) {
      if (Array.isArray(value)) {
        return value.map((item) => (typeof item === 'object' && item !== null)
          ? item.question + ' | ' + item.answer
          : String(item)).join(value.length && typeof value[0] === 'object' ? '; ' : ', ');
      }
      return value === null || value === undefined ? '' : String(value);
    }

    function renderEditor(index, node) {
      const panel = $('editor');
      panel.innerHTML = '';
      if (node === null) {
        const p = document.createElement('p');
        p.className = 'empty';
        p.textContent = 'Click a component in the preview to edit its properties.';
        panel.appendChild(p);
        return;
      }
      const title = document.createElement('h3');
      title.textContent = node.type + ' #' + index;
      panel.appendChild(title);

      Object.entries(node.props || {}).forEach(([name, value]) => {
        const wrap = document.createElement('div');
        wrap.className = 'prop';
        const label = document.createElement('label');
        label.textContent = name;
        const input = document.createElement('input');
        input.value = displayValue(value);
        input.addEventListener('change', () => setProp(index, name, input.value));
        wrap.appendChild(label);
        wrap.appendChild(input);
        panel.appendChild(wrap);
      });

      const addRow = document.createElement('div');
      addRow.className = 'row';
      const nameInput = document.createElement('input');
      nameInput.placeholder = 'new property';
      const addBtn = document.createElement('button');
      addBtn.type = 'button';
      addBtn.textContent = 'Add';
      addBtn.addEventListener('click', async () => {
        try {
          show(await api('POST', '/api/nodes/' + index + '/props', { name: nameInput.value }));
          await openNode(index);
        } catch (e) { setStatus(e.message, true); }
      });
      addRow.appendChild(nameInput);
      addRow.appendChild(addBtn);
      panel.appendChild(addRow);

      const delRow = document.createElement('div');
      delRow.className = 'row';
      const delBtn = document.createElement('button');
      delBtn.type = 'button';
      delBtn.className = 'danger';
      delBtn.textContent = 'Delete component';
      delBtn.addEventListener('click', async () => {
        if (!confirm('Remove this ' + node.type + ' component?')) return;
        try {
          selected = null;
          show(await api('DELETE', '/api/nodes/' + index + '?confirmed=true'));
        } catch (e) { setStatus(e.message, true); }
      });
      delRow.appendChild(delBtn);
      panel.appendChild(delRow);
    }

    async function openNode(index) {
      try {
        const data = await api('GET', '/api/nodes/' + index);
        selected = index;
        markSelected();
        renderEditor(index, data.node);
      } catch (e) { setStatus(e.message, true); }
    }

    async function setProp(index, name, value) {
      try {
        show(await api('PUT', '/api/nodes/' + index + '/props/' + encodeURIComponent(name), { value }));
        if (selected === index) await openNode(index);
      } catch (e) { setStatus(e.message, true); }
    }

    $('output').addEventListener('click', (event) => {
      const node = event.target.closest('.node');
      if (!node || (current && current.mode !== 'preview')) return;
      const index = Number(node.dataset.nodeIndex);
      if (index !== selected) openNode(index);
    });

    $('output').addEventListener('focusout', (event) => {
      const target = event.target;
      if (!target.dataset || !target.dataset.prop) return;
      const node = target.closest('.node');
      if (!node) return;
      const index = Number(node.dataset.nodeIndex);
      const prop = target.dataset.prop;
      if (target.dataset.item !== undefined) {
        const items = Array.from(node.querySelectorAll('[data-prop="' + prop + '"][data-item]'))
          .sort((a, b) => Number(a.dataset.item) - Number(b.dataset.item))
          .map((el) => el.textContent.trim());
        setProp(index, prop, items);
      } else {
        setProp(index, prop, target.textContent.trim());
      }
    });

    $('generate').addEventListener('click', async () => {
      if (pending) return;
      const prompt = $('prompt').value.trim();
      if (!prompt) { setStatus('Please enter a description', true); return; }
      setPending(true);
      setStatus('Generating...');
      try {
        selected = null;
        show(await api('POST', '/api/generate', { prompt }));
      } catch (e) {
        setStatus(e.message, true);
      } finally {
        setPending(false);
      }
    });

    $('clear').addEventListener('click', async () => {
      try {
        selected = null;
        $('prompt').value = '';
        show(await api('POST', '/api/clear'));
      } catch (e) { setStatus(e.message, true); }
    });

    $('export').addEventListener('click', () => { window.location.href = '/export'; });

    $('mode').addEventListener('change', async () => {
      try {
        show(await api('PUT', '/api/mode', { mode: $('mode').value }));
      } catch (e) { setStatus(e.message, true); }
    });

    $('theme-toggle').addEventListener('click', () => {
      const dark = !document.body.classList.contains('dark');
      document.body.classList.toggle('dark', dark);
      localStorage.setItem(THEME_KEY, dark ? 'dark' : 'light');
    });

    document.addEventListener('DOMContentLoaded', async () => {
      if (localStorage.getItem(THEME_KEY) === 'dark') document.body.classList.add('dark');
      try {
        const view = await api('GET', '/api/state');
        $('prompt').value = view.prompt || '';
        show(view);
      } catch (e) { setStatus(e.message, true); }
    });
  </script>
</body>
</html>
"##;
