//! Global CSS styles for SureCover.
//!
//! Clean, high-contrast palette built around the brand green.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --brand: #0b7a4b;
  --brand-dark: #075c38;
  --brand-tint: #e7f4ee;

  /* SURFACES */
  --surface: #ffffff;
  --surface-muted: #f5f7f6;
  --border: #d9e0dc;

  /* TEXT */
  --text-primary: #14201a;
  --text-secondary: #4b5a52;
  --text-muted: #7d8a83;

  /* SEMANTIC (toast kinds) */
  --success: #1f9d55;
  --error: #d64545;
  --warning: #e0900b;
  --info: #2f6fdb;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --radius: 10px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--surface-muted);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

*:focus-visible {
  outline: 2px solid var(--brand);
  outline-offset: 2px;
}

/* === Home === */
.home {
  max-width: 560px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.page-title {
  font-size: var(--text-2xl);
  color: var(--brand-dark);
}

.tagline {
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

/* === Cards === */
.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.card-title {
  font-size: var(--text-xl);
  margin-bottom: 0.5rem;
}

.card-text {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.card-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 1rem;
}

/* === Buttons === */
.btn {
  font: inherit;
  font-weight: 600;
  border-radius: var(--radius);
  padding: 0.6rem 1.2rem;
  cursor: pointer;
  border: 1px solid transparent;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background: var(--brand);
  color: #fff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--brand-dark);
}

.btn-secondary {
  background: transparent;
  border-color: var(--brand);
  color: var(--brand);
}

.btn-danger {
  background: var(--error);
  color: #fff;
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover:not(:disabled) {
  background: var(--brand-tint);
}

.icon-btn {
  background: none;
  border: none;
  cursor: pointer;
  color: var(--text-muted);
  font-size: 1.25rem;
  line-height: 1;
  padding: 0.25rem;
}

.icon-btn:hover {
  color: var(--text-primary);
}

/* === Inputs === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
}

.input-hint {
  font-weight: 400;
  color: var(--text-muted);
}

.input-field {
  font: inherit;
  padding: 0.6rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
}

.input-field:focus {
  border-color: var(--brand);
  outline: none;
}

.input-invalid {
  border-color: var(--error);
}

.input-error {
  color: var(--error);
  font-size: var(--text-sm);
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1rem;
  bottom: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  width: min(360px, calc(100vw - 2rem));
  z-index: 1000;
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-left: 4px solid var(--info);
  border-radius: var(--radius);
  padding: 0.75rem 0.75rem 0.75rem 1rem;
  box-shadow: 0 6px 20px rgba(20, 32, 26, 0.12);
  animation: toast-in 200ms ease-out;
}

.toast-icon {
  flex: none;
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 700;
  color: #fff;
  background: var(--info);
}

.toast-body {
  flex: 1;
  min-width: 0;
}

.toast-title {
  font-weight: 600;
}

.toast-message {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.toast-success { border-left-color: var(--success); }
.toast-success .toast-icon { background: var(--success); }
.toast-error { border-left-color: var(--error); }
.toast-error .toast-icon { background: var(--error); }
.toast-warning { border-left-color: var(--warning); }
.toast-warning .toast-icon { background: var(--warning); }
.toast-info { border-left-color: var(--info); }
.toast-info .toast-icon { background: var(--info); }

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

@media (max-width: 480px) {
  .toast-stack {
    left: 1rem;
    right: 1rem;
    width: auto;
  }
}
"#;
