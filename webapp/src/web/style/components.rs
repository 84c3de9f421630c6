pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-6);
  border: 1px solid transparent;
  border-radius: var(--radius-full);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn:disabled {
  opacity: 0.7;
  cursor: not-allowed;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-success {
  background-color: var(--success);
}

.btn-success:hover {
  background-color: var(--success-dark);
}

.btn-outline {
  border-color: var(--primary);
  color: var(--primary);
  background: transparent;
}

/* Filter bar */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-3);
  margin-bottom: var(--space-8);
}

.filter-btn {
  padding: var(--space-2) var(--space-6);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-secondary);
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.filter-btn.active {
  background-color: var(--primary);
  color: var(--text-inverse);
  box-shadow: var(--shadow-md);
  transform: scale(1.05);
}

/* Project cards */
.projects-grid {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-8);
}

.project-card {
  width: 100%;
  max-width: 384px;
  display: flex;
  flex-direction: column;
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  overflow: hidden;
  box-shadow: var(--shadow-lg);
}

.project-thumb {
  position: relative;
  height: 192px;
  overflow: hidden;
  cursor: pointer;
  border: none;
  padding: 0;
  background: none;
}

.project-thumb img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-thumb .overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--overlay);
  color: var(--text-inverse);
  opacity: 0;
  transition: opacity var(--transition-fast) var(--easing-standard);
}

.project-thumb:hover .overlay,
.project-thumb:focus .overlay {
  opacity: 1;
}

.project-body {
  padding: var(--space-6);
  display: flex;
  flex-direction: column;
  flex-grow: 1;
}

.category-tag {
  align-self: flex-start;
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  color: var(--primary);
  margin-bottom: var(--space-2);
}

.badges {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-top: auto;
}

.badge {
  font-size: 0.75rem;
  padding: var(--space-1) var(--space-2);
  border-radius: var(--radius-md);
  background-color: var(--badge);
  color: var(--text-secondary);
}

/* Reveal on scroll */
.reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-reveal) var(--easing-standard),
              transform var(--transition-reveal) var(--easing-standard);
}

.reveal.active {
  opacity: 1;
  transform: translateY(0);
}

/* Project modal */
body.modal-open {
  overflow: hidden;
}

.modal {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: none;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
}

.modal.flex {
  display: flex;
}

.modal-backdrop {
  position: absolute;
  inset: 0;
  background-color: var(--overlay);
}

.modal-content {
  position: relative;
  max-width: 768px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  background-color: var(--surface);
  color: var(--text-primary);
  border-radius: var(--radius-xl);
  opacity: 0;
  transform: scale(0.95);
  transition: opacity var(--transition-modal) var(--easing-standard),
              transform var(--transition-modal) var(--easing-standard);
}

.modal-content.shown {
  opacity: 1;
  transform: scale(1);
}

.modal-hero {
  position: relative;
  height: 256px;
}

.modal-hero img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.modal-tags {
  position: absolute;
  left: var(--space-6);
  bottom: var(--space-6);
}

.modal-tags span {
  color: var(--text-inverse);
  font-size: 0.75rem;
  font-weight: 700;
  padding: var(--space-1) var(--space-3);
  border: 1px solid rgba(255, 255, 255, 0.3);
  border-radius: var(--radius-md);
  background-color: rgba(255, 255, 255, 0.2);
}

.btn-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  border: none;
  font-size: 1.5rem;
  cursor: pointer;
}

.modal-body {
  padding: var(--space-8);
  display: grid;
  gap: var(--space-6);
}

.modal-actions {
  display: flex;
  gap: var(--space-4);
}

/* Contact form */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  margin-bottom: var(--space-4);
}

.form-input,
.form-textarea {
  padding: var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
}

.form-status {
  margin-top: var(--space-4);
  color: var(--success);
}

.hidden {
  display: none;
}
"#;
