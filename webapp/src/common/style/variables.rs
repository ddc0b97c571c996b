pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #6366F1;          /* Primary brand indigo */
  --primary-light: #818CF8;    /* Lighter indigo for hover states */
  --primary-dark: #4F46E5;     /* Darker indigo for active states */
  --primary-soft: #EEF2FF;     /* Tinted backgrounds */
  --secondary: #EC4899;        /* Secondary pink for gradients */
  --secondary-dark: #DB2777;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;
  --neutral-950: #030712;

  /* Semantic Colors */
  --success: #10B981;
  --success-soft: #D1FAE5;
  --success-text: #065F46;
  --error: #EF4444;
  --error-soft: #FEE2E2;
  --error-text: #991B1B;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --background-alt: var(--neutral-50);
  --surface: #FFFFFF;
  --surface-glass: rgba(255, 255, 255, 0.8);
  --header-glass: rgba(255, 255, 255, 0.9);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;
  --accent-text: var(--primary-dark);

  /* Border Colors */
  --border: var(--neutral-200);
  --border-strong: var(--neutral-300);
  --border-focus: var(--primary);

  /* Layout */
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-2xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 500ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
  --easing-out: cubic-bezier(0.0, 0.0, 0.2, 1);

  color-scheme: light;
}

/* the theme toggle adds .dark to <html>; only the palette changes */
:root.dark {
  --primary-soft: rgba(99, 102, 241, 0.2);

  --success-soft: rgba(16, 185, 129, 0.2);
  --success-text: #6EE7B7;
  --error-soft: rgba(239, 68, 68, 0.2);
  --error-text: #FCA5A5;

  --background: var(--neutral-900);
  --background-alt: var(--neutral-800);
  --surface: var(--neutral-800);
  --surface-glass: rgba(31, 41, 55, 0.5);
  --header-glass: rgba(17, 24, 39, 0.9);

  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);
  --accent-text: var(--primary-light);

  --border: rgba(55, 65, 81, 0.5);
  --border-strong: var(--neutral-600);

  color-scheme: dark;
}"#;
