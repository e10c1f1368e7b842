//! Global CSS styles for the Catalog Browser.
//!
//! Cell color, size and opacity are inline styles computed per cell; this
//! sheet covers layout, hover behavior and the controls.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --void-black: #0a0a0a;
  --void-lighter: #0a0e0f;
  --void-border: #1a1a1a;

  /* Accents */
  --moss: #5a7a5a;
  --moss-glow: #7cb87c;
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Cells */
  --cell-border: #f5f5f5;
  --cell-text: #0a0a0a;

  /* Typography */
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Browser Layout === */
.browser {
  display: flex;
  flex-direction: column;
  height: 100vh;
}

.browser-controls {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1rem;
  border-bottom: 1px solid var(--void-border);
}

.browser-title {
  font-size: var(--text-xl);
  font-weight: 400;
  letter-spacing: 0.1em;
  color: var(--cyan);
}

.browser-toolbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.filter-summary {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.browser-body {
  display: flex;
  flex: 1;
  min-height: 0;
}

.grid-scroll {
  flex: 1;
  overflow: auto;
  padding: 1rem;
}

.browser.mobile .browser-body {
  flex-direction: column;
}

/* === Grid === */
.catalog-grid {
  display: flex;
  flex-direction: column;
  width: fit-content;
  height: 100%;
  position: relative;
}

/* === Cell === */
.cell {
  margin: 0.125rem;
  padding: 0.25rem;
  border: 1px solid var(--cell-border);
  color: var(--cell-text);
  cursor: pointer;
  position: relative;
  z-index: 0;
  transition: all var(--transition-fast);
}

.cell.hoverable:hover {
  transform: scale(var(--hover-scale, 1.5));
  z-index: 10;
}

.cell.disabled {
  cursor: default;
}

.cell-body {
  display: flex;
  flex-direction: column;
  position: relative;
  width: 100%;
  height: 100%;
}

.cell-header {
  display: flex;
  width: 100%;
  justify-content: space-between;
  align-items: center;
}

.cell-icon {
  width: 10px;
  height: 10px;
}

.cell-length {
  font-size: 0.5rem;
}

.cell-slug {
  width: 100%;
  font-weight: 700;
  font-size: var(--text-xs);
}

.cell-name {
  width: 100%;
  height: 100%;
  font-size: 0.5rem;
  overflow: hidden;
}

/* === Input Fields === */
.search-input-wrapper {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  background: transparent;
  border: 1px solid var(--void-border);
  border-radius: 4px;
  color: var(--cyan);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  transition: all 0.2s ease;
}

.input-field::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.input-field:focus {
  outline: none;
  border-color: var(--cyan);
  box-shadow: 0 0 0 1px var(--cyan), 0 0 20px var(--cyan-glow);
}

.search-clear {
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-xl);
  cursor: pointer;
  line-height: 1;
}

/* === Category Pills === */
.category-pills {
  display: flex;
  gap: 0.5rem;
  flex-wrap: wrap;
}

.pill {
  padding: 0.375rem 0.75rem;
  border: 1px solid var(--moss);
  border-radius: 4px;
  background: transparent;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all 0.2s ease;
}

.pill:hover {
  color: var(--text-primary);
}

.pill.selected {
  background: var(--moss);
  color: var(--text-primary);
}

/* === Zoom Control === */
.zoom-control {
  display: inline-flex;
  border: 1px solid var(--void-border);
  border-radius: 4px;
  overflow: hidden;
}

.zoom-btn {
  padding: 0.25rem 0.75rem;
  background: transparent;
  border: none;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  cursor: pointer;
}

.zoom-btn.active {
  background: var(--cyan);
  color: var(--void-black);
}

/* === Active Element Panel === */
.active-element-panel {
  width: 240px;
  padding: 1rem;
  border-left: 1px solid var(--void-border);
  background: var(--void-lighter);
}

.browser.mobile .active-element-panel {
  width: 100%;
  border-left: none;
  border-top: 1px solid var(--void-border);
}

.active-element-header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.active-element-swatch {
  width: 12px;
  height: 12px;
  border: 1px solid var(--cell-border);
}

.active-element-slug {
  flex: 1;
  font-size: var(--text-xl);
  font-weight: 700;
}

.active-element-icon {
  width: 32px;
  height: 32px;
  margin-bottom: 0.75rem;
}

.active-element-fields {
  display: grid;
  grid-template-columns: auto 1fr;
  gap: 0.25rem 0.75rem;
  font-size: var(--text-sm);
}

.active-element-fields dt {
  color: var(--text-muted);
}

.close-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-xl);
  cursor: pointer;
  line-height: 1;
  transition: color 0.2s ease;
}

.close-btn:hover {
  color: var(--text-primary);
}
"#;
