pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  font-weight: 500;
  border-radius: var(--radius-md);
  border: 1px solid transparent;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

.btn:focus-visible {
  outline: none;
  box-shadow: 0 0 0 2px var(--background), 0 0 0 4px var(--primary);
}

.btn:active {
  transform: scale(0.98);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background-image: linear-gradient(to right, var(--primary), var(--secondary));
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.btn-secondary {
  background-image: linear-gradient(to right, var(--secondary), var(--primary));
  color: var(--text-inverse);
}

.btn-secondary:hover {
  background-color: var(--secondary-dark);
  text-decoration: none;
}

.btn-outline {
  background-color: transparent;
  border-color: var(--border-strong);
  color: var(--text-secondary);
}

.btn-outline:hover,
.btn-ghost:hover {
  background-color: var(--background-alt);
  text-decoration: none;
}

.btn-ghost {
  background-color: transparent;
  color: var(--text-secondary);
}

.btn-sm {
  font-size: 0.75rem;
  padding: var(--space-2) var(--space-3);
  gap: 6px;
}

.btn-md {
  font-size: 0.875rem;
  padding: 10px var(--space-4);
  gap: var(--space-2);
}

.btn-lg {
  font-size: 1rem;
  padding: var(--space-3) var(--space-5);
  gap: 10px;
}

.btn-block {
  width: 100%;
}

.btn-icon {
  display: inline-flex;
}

/* Icons */
.icon {
  flex-shrink: 0;
}

/* Section headings */
.section-heading {
  text-align: center;
  margin-bottom: var(--space-12);
}

.section-heading.badged {
  margin-bottom: var(--space-16);
}

.section-badge {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 64px;
  height: 64px;
  margin-bottom: var(--space-6);
  border-radius: var(--radius-full);
  background-image: linear-gradient(to right, var(--primary), var(--secondary));
  color: var(--text-inverse);
  box-shadow: var(--shadow-lg);
}

.section-title {
  font-size: clamp(1.875rem, 4vw, 2.25rem);
  font-weight: 700;
  color: var(--text-primary);
}

.section-heading.badged .section-title {
  font-size: clamp(1.875rem, 5vw, 3rem);
  margin-bottom: var(--space-4);
}

.section-accent {
  color: var(--accent-text);
}

.section-accent.gradient {
  background-image: linear-gradient(to right, var(--primary-dark), var(--secondary-dark));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.section-rule {
  width: 96px;
  height: 4px;
  margin: var(--space-4) auto 0;
  border-radius: var(--radius-full);
  background-color: var(--accent-text);
}

.section-subtitle {
  max-width: 42rem;
  margin: var(--space-4) auto 0;
  color: var(--text-secondary);
}

/* Chips */
.chip {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  font-size: 0.75rem;
  font-weight: 500;
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--background-alt);
  color: var(--text-secondary);
  transition: background-color var(--transition-fast) var(--easing-standard),
              border-color var(--transition-fast) var(--easing-standard);
}

.chip-dark {
  background-color: rgba(55, 65, 81, 0.5);
  color: #A5B4FC;
  border-color: rgba(75, 85, 99, 0.5);
}

/* Call-to-action pill under the grids */
.coming-soon {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface-glass);
  box-shadow: var(--shadow-lg);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.pulse-dot {
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  animation: pulse 2s var(--easing-standard) infinite;
}

/* Social links */
.social-links {
  display: flex;
  gap: var(--space-4);
}

.social-link {
  display: inline-flex;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--neutral-100);
  color: var(--neutral-500);
  transition: background-color var(--transition-fast) var(--easing-standard);
}

:root.dark .social-link {
  background-color: var(--neutral-700);
}

.social-link:hover {
  background-color: var(--primary-soft);
}

.social-link img,
.social-link svg {
  width: 20px;
  height: 20px;
}

/* Theme toggle */
.theme-toggle {
  position: relative;
  padding: var(--space-2);
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--neutral-100);
  color: var(--neutral-500);
  cursor: pointer;
  transition: color var(--transition-fast) var(--easing-standard);
}

:root.dark .theme-toggle {
  background-color: var(--neutral-800);
  color: var(--neutral-400);
}

.theme-toggle:hover {
  color: var(--accent-text);
}

.theme-toggle:active {
  transform: scale(0.95);
}

.theme-icon-stack {
  position: relative;
  display: block;
  width: 20px;
  height: 20px;
}

.theme-icon {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: opacity 200ms var(--easing-standard), transform 200ms var(--easing-standard);
}

.theme-icon.hidden {
  opacity: 0;
  transform: scale(0.5);
}

/* Form Elements */
.form-stack {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  color: var(--text-secondary);
}

.form-input {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
}

:root.dark .form-input {
  background-color: var(--neutral-700);
}

.form-input:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--primary);
}

.form-input.invalid {
  border-color: var(--error);
}

.form-error {
  margin-top: var(--space-1);
  font-size: 0.875rem;
  color: var(--error);
}

.banner {
  padding: var(--space-4);
  margin-bottom: var(--space-6);
  border-radius: var(--radius-lg);
  animation: banner-in 300ms var(--easing-out) both;
}

.banner-success {
  background-color: var(--success-soft);
  color: var(--success-text);
}

.banner-error {
  background-color: var(--error-soft);
  color: var(--error-text);
}
"#;
