//! Global CSS for the Solo Dev Template.
//!
//! Baseline reset first (so host document defaults never leak into the
//! page), then layout, then component classes from `solodev-ui`.

pub const GLOBAL_STYLES: &str = r#"
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
  -webkit-text-size-adjust: 100%;
}

body {
  font-family: var(--font-family);
  font-size: var(--text-body);
  background: var(--background);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

button, input {
  font: inherit;
  color: inherit;
}

strong, b {
  font-weight: 700;
}

/* === Layout === */
.page {
  min-height: 100vh;
}

.container {
  max-width: 900px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
  text-align: center;
}

/* === Typography === */
.hero-title {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-size: var(--text-h1);
  font-weight: 300;
  line-height: 1.2;
  letter-spacing: -0.01em;
  margin-bottom: 0.35em;
}

.hero-icon {
  font-size: 0.6em;
}

.hero-subtitle {
  font-size: 1rem;
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.card-title {
  font-size: var(--text-h2);
  font-weight: 400;
  margin-bottom: 0.35em;
}

.card-body {
  margin-bottom: 1.5rem;
}

/* === Card === */
.card {
  margin: 2rem 0;
  padding: 1rem;
  background: var(--paper);
  border-radius: 4px;
  box-shadow:
    0 2px 1px -1px rgba(0, 0, 0, 0.2),
    0 1px 1px 0 rgba(0, 0, 0, 0.14),
    0 1px 3px 0 rgba(0, 0, 0, 0.12);
}

.card-content {
  padding: 1rem;
}

/* === Form === */
.form-stack {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.text-field {
  display: inline-flex;
  flex-direction: column;
  text-align: left;
}

.text-field-full-width {
  display: flex;
  width: 100%;
}

.text-field-label {
  margin-bottom: 0.25rem;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.text-field-input {
  padding: 1rem 0.875rem;
  border: 1px solid rgba(0, 0, 0, 0.23);
  border-radius: 4px;
  background: transparent;
  transition: border-color 150ms ease;
}

.text-field-input:hover {
  border-color: var(--text-primary);
}

.text-field-input:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 1px var(--primary);
}

.text-field-helper {
  min-height: 1.25em;
  margin: 0.2rem 0.875rem 0;
  font-size: 0.75rem;
  color: var(--text-secondary);
}

.text-field-error .text-field-label,
.text-field-error .text-field-helper {
  color: var(--error);
}

.text-field-error .text-field-input,
.text-field-error .text-field-input:focus {
  border-color: var(--error);
  box-shadow: 0 0 0 1px var(--error);
}

/* === Buttons === */
.btn {
  --btn-color: var(--primary);
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 4px;
  font-weight: 500;
  letter-spacing: 0.03em;
  text-transform: uppercase;
  cursor: pointer;
  transition: background-color 250ms ease, box-shadow 250ms ease;
}

.btn-color-primary { --btn-color: var(--primary); }
.btn-color-secondary { --btn-color: var(--secondary); }

.btn-md { padding: 0.375rem 1rem; font-size: 0.875rem; }
.btn-lg { padding: 0.5rem 1.375rem; font-size: 0.9375rem; }

.btn-full-width { width: 100%; }

.btn-contained {
  background: var(--btn-color);
  color: #fff;
  border: none;
  box-shadow: 0 3px 1px -2px rgba(0, 0, 0, 0.2), 0 2px 2px 0 rgba(0, 0, 0, 0.14);
}

.btn-contained:hover {
  filter: brightness(0.9);
}

.btn-outlined {
  background: transparent;
  color: var(--btn-color);
  border: 1px solid var(--btn-color);
}

.btn-outlined:hover {
  background: rgba(0, 0, 0, 0.04);
}

.link-row {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 1.75rem;
  height: 1.75rem;
  border: none;
  border-radius: 50%;
  background: transparent;
  cursor: pointer;
  font-size: 1.25rem;
  line-height: 1;
}

.icon-btn:hover {
  background: rgba(0, 0, 0, 0.08);
}

/* === Snackbar === */
.snackbar {
  position: fixed;
  left: 24px;
  bottom: 24px;
  z-index: 1400;
  min-width: 288px;
  animation: snackbar-enter 225ms cubic-bezier(0.4, 0, 0.2, 1);
}

@keyframes snackbar-enter {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}

.alert {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  width: 100%;
  padding: 0.375rem 1rem;
  border-radius: 4px;
  font-size: 0.875rem;
  text-align: left;
}

.alert-icon { font-size: 1.1rem; }
.alert-message { flex: 1; padding: 0.5rem 0; }
.alert-action { margin-left: auto; }

.alert-success { background: #edf7ed; color: #1e4620; }
.alert-success .alert-icon { color: var(--success); }
"#;
