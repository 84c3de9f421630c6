pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #1E3A8A;          /* navy, links and active states */
  --primary-light: #3B82F6;
  --primary-dark: #172554;
  --success: #16A34A;
  --success-dark: #15803D;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: var(--neutral-50);
  --surface: #FFFFFF;
  --overlay: rgba(17, 24, 39, 0.7);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  --border: var(--neutral-200);
  --badge: var(--neutral-100);

  /* Layout */
  --header-height: 64px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  --radius-md: 6px;
  --radius-xl: 12px;
  --radius-full: 9999px;

  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-modal: 300ms;
  --transition-reveal: 600ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* the theme store toggles this class on <html> */
:root.dark {
  --primary: #60A5FA;
  --primary-light: #93C5FD;
  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-300);
  --border: var(--neutral-700);
  --badge: var(--neutral-700);
}"#;
