//! Static activity catalog: lessons, seed project data and feedback
//! templates.
//!
//! A [`Catalog`] is immutable configuration. Sessions are seeded from it
//! and never write back. Besides the built-in mock e-commerce lesson
//! ([`Catalog::builtin`]), catalogs round-trip through JSON so lessons
//! can be shipped as configuration files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};
use crate::models::{
    Activity, ActivityKind, ActivityStatus, BuildStatus, DecisionOption, EditableRegion,
    GitEntryKind, Lesson, ProjectFile, ProjectState, VideoRef, VisualRef,
};

/// A canned feedback message played back as simulated AI output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackTemplate {
    /// Full feedback text (markdown)
    pub message: String,

    /// Whether the template accompanies a success outcome
    pub is_success: bool,
}

impl FeedbackTemplate {
    fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_success: true,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_success: false,
        }
    }
}

/// The initial simulated commit every session's git log starts with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedCommit {
    /// Synthetic activity id for the setup commit
    pub activity_id: String,

    /// Commit message
    pub message: String,

    /// Files the setup commit touched
    pub files_changed: Vec<String>,

    /// Entry classification
    pub kind: GitEntryKind,
}

/// Immutable lesson/activity/project configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    /// Available lessons
    pub lessons: Vec<Lesson>,

    /// All activities across lessons, ordered by lesson and order
    pub activities: Vec<Activity>,

    /// Seed state of the mock project
    pub project: ProjectState,

    /// The initial commit on the simulated git log
    pub seed_commit: SeedCommit,

    /// Feedback template table consulted by the resolver
    pub feedback: BTreeMap<String, FeedbackTemplate>,
}

/// Template key for the fallback success message.
pub const DEFAULT_SUCCESS_KEY: &str = "default.success";

/// Template key for the fallback failure message.
pub const DEFAULT_FAILURE_KEY: &str = "default.failure";

impl Catalog {
    /// Parses a catalog from JSON and validates its invariants.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serializes the catalog to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Looks up a lesson by id.
    pub fn lesson(&self, lesson_id: &str) -> Result<&Lesson> {
        self.lessons
            .iter()
            .find(|l| l.id == lesson_id)
            .ok_or_else(|| SessionError::LessonNotFound {
                id: lesson_id.to_string(),
            })
    }

    /// Returns the activities of a lesson in order.
    pub fn activities_for(&self, lesson_id: &str) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .activities
            .iter()
            .filter(|a| a.lesson_id == lesson_id)
            .cloned()
            .collect();
        activities.sort_by_key(|a| a.order);
        activities
    }

    /// Looks up a feedback template by key.
    pub fn template(&self, key: &str) -> Option<&FeedbackTemplate> {
        self.feedback.get(key)
    }

    /// Checks the structural invariants the engine relies on.
    ///
    /// - every lesson has at least one activity, orders contiguous from 1
    /// - exactly the first activity is `Current`, the rest `Locked`
    /// - activity ids unique, project file paths unique
    /// - lesson `total_activities` matches the actual count
    pub fn validate(&self) -> Result<()> {
        let mut seen_ids = std::collections::BTreeSet::new();
        for activity in &self.activities {
            if !seen_ids.insert(activity.id.as_str()) {
                return Err(SessionError::catalog(format!(
                    "duplicate activity id '{}'",
                    activity.id
                )));
            }
        }

        for lesson in &self.lessons {
            let activities = self.activities_for(&lesson.id);
            if activities.is_empty() {
                return Err(SessionError::catalog(format!(
                    "lesson '{}' has no activities",
                    lesson.id
                )));
            }
            if activities.len() != lesson.total_activities {
                return Err(SessionError::catalog(format!(
                    "lesson '{}' declares {} activities but has {}",
                    lesson.id,
                    lesson.total_activities,
                    activities.len()
                )));
            }
            for (i, activity) in activities.iter().enumerate() {
                let expected_order = (i + 1) as u32;
                if activity.order != expected_order {
                    return Err(SessionError::catalog(format!(
                        "activity '{}' has order {} but position implies {expected_order}",
                        activity.id, activity.order
                    )));
                }
                let expected_status = if i == 0 {
                    ActivityStatus::Current
                } else {
                    ActivityStatus::Locked
                };
                if activity.status != expected_status {
                    return Err(SessionError::catalog(format!(
                        "activity '{}' must start as {} but is {}",
                        activity.id,
                        expected_status.as_str(),
                        activity.status.as_str()
                    )));
                }
            }
        }

        let mut seen_paths = std::collections::BTreeSet::new();
        for file in &self.project.files {
            if !seen_paths.insert(file.path.as_str()) {
                return Err(SessionError::catalog(format!(
                    "duplicate project file path '{}'",
                    file.path
                )));
            }
        }

        Ok(())
    }

    /// The built-in "BoxShop" mock e-commerce lesson.
    pub fn builtin() -> Self {
        let catalog = Catalog {
            lessons: vec![Lesson {
                id: "lesson-1".to_string(),
                title: "E-commerce Frontend with AI".to_string(),
                description: "Build the storefront of a boxing-gear shop, using a simulated \
                              AI assistant to accelerate development."
                    .to_string(),
                project_name: "BoxShop".to_string(),
                total_activities: 6,
                estimated_minutes: 40,
            }],
            activities: builtin_activities(),
            project: builtin_project(),
            seed_commit: SeedCommit {
                activity_id: "setup".to_string(),
                message: "feat: initialize BoxShop project".to_string(),
                files_changed: vec![
                    "src/App.tsx".to_string(),
                    "src/components/ProductGrid.tsx".to_string(),
                    "src/components/ProductCard.tsx".to_string(),
                ],
                kind: GitEntryKind::ActivityComplete,
            },
            feedback: builtin_feedback(),
        };
        debug_assert!(catalog.validate().is_ok());
        catalog
    }
}

fn builtin_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "act-1".to_string(),
            lesson_id: "lesson-1".to_string(),
            order: 1,
            title: "Review the Generated Header".to_string(),
            objective: "The AI generated a Header component for BoxShop. Decide whether it \
                        is production ready."
                .to_string(),
            instructions: "The assistant generated the code below.\n\n\
                           Your mission:\n\
                           1. Read the generated code\n\
                           2. Spot problems (accessibility, semantics, maintainability)\n\
                           3. Decide: approve, request a new generation, or edit by hand\n\n\
                           Tip: watch for hardcoded values and missing types."
                .to_string(),
            target_files: vec!["src/components/Header.tsx".to_string()],
            status: ActivityStatus::Current,
            kind: ActivityKind::QualityReview {
                generated_code: HEADER_GENERATED_CODE.to_string(),
                expected_issues: vec![
                    "Image has no alt attribute".to_string(),
                    "Inline styles instead of classes".to_string(),
                    "div soup instead of header/nav semantics".to_string(),
                    "Cart count hardcoded".to_string(),
                    "No TypeScript types".to_string(),
                ],
            },
        },
        Activity {
            id: "act-2".to_string(),
            lesson_id: "lesson-1".to_string(),
            order: 2,
            title: "Refactor the ProductCard".to_string(),
            objective: "ProductCard works but re-renders too much. Improve it without \
                        changing its structure."
                .to_string(),
            instructions: "The ProductCard component causes unnecessary re-renders.\n\n\
                           Your mission:\n\
                           1. Identify the performance problem\n\
                           2. Edit ONLY the highlighted regions\n\
                           3. Do not change the component structure\n\n\
                           Constraint: only lines 8-12 and 18-22 are editable."
                .to_string(),
            target_files: vec!["src/components/ProductCard.tsx".to_string()],
            status: ActivityStatus::Locked,
            kind: ActivityKind::ConstrainedEdit {
                starter_code: PRODUCT_CARD_CODE.to_string(),
                editable_regions: vec![
                    EditableRegion {
                        start_line: 8,
                        end_line: 12,
                        hint: Some("Memoize this computation".to_string()),
                    },
                    EditableRegion {
                        start_line: 18,
                        end_line: 22,
                        hint: Some("Avoid creating a new function on every render".to_string()),
                    },
                ],
            },
        },
        Activity {
            id: "act-3".to_string(),
            lesson_id: "lesson-1".to_string(),
            order: 3,
            title: "Cart State Architecture".to_string(),
            objective: "The project will grow. Choose how to manage the cart state."
                .to_string(),
            instructions: "BoxShop needs state management for the cart.\n\n\
                           Weigh the options and pick an approach. Your decision shapes the \
                           next activities and the project structure.\n\n\
                           There is no wrong answer; every option has trade-offs."
                .to_string(),
            target_files: vec!["src/context/".to_string(), "src/hooks/".to_string()],
            status: ActivityStatus::Locked,
            kind: ActivityKind::DecisionFork {
                options: vec![
                    DecisionOption {
                        id: "opt-context".to_string(),
                        label: "React Context + useReducer".to_string(),
                        description: "React's built-in solution, zero extra dependencies."
                            .to_string(),
                        impact: "Creates CartContext.tsx and useCart.ts".to_string(),
                    },
                    DecisionOption {
                        id: "opt-zustand".to_string(),
                        label: "Zustand".to_string(),
                        description: "Minimal store, simple API, great DX.".to_string(),
                        impact: "Creates stores/cartStore.ts".to_string(),
                    },
                    DecisionOption {
                        id: "opt-localstorage".to_string(),
                        label: "LocalStorage + custom hook".to_string(),
                        description: "Persists automatically, no extra setup.".to_string(),
                        impact: "Creates hooks/usePersistedCart.ts".to_string(),
                    },
                ],
            },
        },
        Activity {
            id: "act-4".to_string(),
            lesson_id: "lesson-1".to_string(),
            order: 4,
            title: "Debug: Broken Checkout".to_string(),
            objective: "An automated change broke the checkout. Find and fix the problem."
                .to_string(),
            instructions: "PROJECT BROKEN\n\n\
                           A dependency update crashed the checkout page and the build is \
                           failing.\n\n\
                           Your mission:\n\
                           1. Read the error in the console\n\
                           2. Find the root cause\n\
                           3. Fix the code so the project runs again\n\n\
                           Current error: \"TypeError: Cannot read property 'map' of undefined\""
                .to_string(),
            target_files: vec!["src/pages/CheckoutPage.tsx".to_string()],
            status: ActivityStatus::Locked,
            kind: ActivityKind::BreakAndFix {
                broken_code: CHECKOUT_BROKEN_CODE.to_string(),
                error_message: "TypeError: Cannot read property 'map' of undefined\n    \
                                at CheckoutPage (CheckoutPage.tsx:7:18)\n    \
                                at renderWithHooks (react-dom.development.js:14985:18)\n    \
                                at mountIndeterminateComponent (react-dom.development.js:17811:13)"
                    .to_string(),
            },
        },
        Activity {
            id: "act-5".to_string(),
            lesson_id: "lesson-1".to_string(),
            order: 5,
            title: "useMemo in Practice".to_string(),
            objective: "Watch a senior developer optimize render performance, then apply the \
                        same pattern."
                .to_string(),
            instructions: "After watching the video, add useMemo to the component so filtered \
                           results are not recomputed on every render."
                .to_string(),
            target_files: vec!["src/components/ProductList.tsx".to_string()],
            status: ActivityStatus::Locked,
            kind: ActivityKind::VideoChallenge {
                starter_code: PRODUCT_LIST_CODE.to_string(),
                video: Some(VideoRef {
                    video_id: "ohrTAqng3uo".to_string(),
                    title: "Final architecture of your boxing e-commerce".to_string(),
                    duration: "10:38".to_string(),
                }),
            },
        },
        Activity {
            id: "act-6".to_string(),
            lesson_id: "lesson-1".to_string(),
            order: 6,
            title: "Implement the Promo Badge".to_string(),
            objective: "Look at the approved badge design and implement the styling."
                .to_string(),
            instructions: "The reference image shows the finished badge. Write the CSS/JSX \
                           to replicate the design."
                .to_string(),
            target_files: vec!["src/components/PromoBadge.tsx".to_string()],
            status: ActivityStatus::Locked,
            kind: ActivityKind::VisualImplementation {
                starter_code: PROMO_BADGE_CODE.to_string(),
                visual: Some(VisualRef {
                    image_url: "https://placehold.co/400x120/dc2626/ffffff?text=SALE+-50%25"
                        .to_string(),
                    caption: Some("Promo badge - approved design".to_string()),
                    expected_output: Some(
                        "Red badge with white caps text, soft shadow, subtle pulse animation"
                            .to_string(),
                    ),
                }),
            },
        },
    ]
}

fn builtin_project() -> ProjectState {
    ProjectState {
        id: "project-boxshop".to_string(),
        name: "BoxShop - Boxing Gear E-commerce".to_string(),
        status: BuildStatus::Ok,
        files: vec![
            ProjectFile {
                path: "src/App.tsx".to_string(),
                name: "App.tsx".to_string(),
                language: "typescript".to_string(),
                content: APP_CODE.to_string(),
            },
            ProjectFile {
                path: "src/components/Header.tsx".to_string(),
                name: "Header.tsx".to_string(),
                language: "typescript".to_string(),
                content: "// Generated by the assistant in activity 1".to_string(),
            },
            ProjectFile {
                path: "src/components/ProductCard.tsx".to_string(),
                name: "ProductCard.tsx".to_string(),
                language: "typescript".to_string(),
                content: PRODUCT_CARD_CODE.to_string(),
            },
            ProjectFile {
                path: "src/components/ProductGrid.tsx".to_string(),
                name: "ProductGrid.tsx".to_string(),
                language: "typescript".to_string(),
                content: PRODUCT_GRID_CODE.to_string(),
            },
            ProjectFile {
                path: "src/pages/CheckoutPage.tsx".to_string(),
                name: "CheckoutPage.tsx".to_string(),
                language: "typescript".to_string(),
                content: CHECKOUT_BROKEN_CODE.to_string(),
            },
        ],
        decisions: vec![],
    }
}

fn builtin_feedback() -> BTreeMap<String, FeedbackTemplate> {
    let mut feedback = BTreeMap::new();

    feedback.insert(
        "quality-review.generate".to_string(),
        FeedbackTemplate::success(
            "Generating a Header component for BoxShop...\n\n\
             Analyzing requirements:\n\
             - Store logo\n\
             - Primary navigation\n\
             - Cart indicator\n\n\
             Component generated. Review the code before approving.",
        ),
    );
    feedback.insert(
        "quality-review.approve".to_string(),
        FeedbackTemplate::success(
            "You approved the code, but a few problems slipped through:\n\n\
             1. **Accessibility**: the image has no `alt` attribute\n\
             2. **Semantics**: `<div>` where `<header>` and `<nav>` belong\n\
             3. **Maintainability**: inline styles\n\
             4. **TypeScript**: no typing\n\n\
             Tip: check these points before approving next time.\n\n\
             The code was applied; consider refactoring later.",
        ),
    );
    feedback.insert(
        "quality-review.edit".to_string(),
        FeedbackTemplate::success(
            "Excellent! You spotted the problems and fixed them by hand.\n\n\
             What you improved:\n\
             - Correct HTML semantics\n\
             - Accessibility via alt text\n\
             - More maintainable code\n\n\
             Reviewing AI output **critically** is what separates juniors from seniors.\n\n\
             Next activity unlocked!",
        ),
    );
    feedback.insert(
        "constrained-edit.hint".to_string(),
        FeedbackTemplate::success(
            "Hint: to avoid needless recomputation, consider `useMemo` for derived values.\n\n\
             For functions passed as props, `useCallback` keeps the reference stable.\n\n\
             Premature optimization is the root of all evil, but components that \
             re-render often (like cards in a list) do benefit.",
        ),
    );
    feedback.insert(
        "constrained-edit.success".to_string(),
        FeedbackTemplate::success(
            "Perfect! You optimized the ProductCard.\n\n\
             Changes applied:\n\
             - `useMemo` memoizes the formatted price\n\
             - `useCallback` stabilizes the add-to-cart handler\n\n\
             The component now skips unnecessary re-renders. Next activity unlocked!",
        ),
    );
    feedback.insert(
        "decision.context".to_string(),
        FeedbackTemplate::success(
            "You chose React Context + useReducer.\n\n\
             A solid choice:\n\
             - Zero extra dependencies\n\
             - Well-documented pattern\n\
             - Good for medium-sized state\n\n\
             Trade-offs:\n\
             - Every consumer re-renders when the context changes\n\
             - Can get verbose for complex state\n\n\
             Creating CartContext.tsx and useCart.ts...",
        ),
    );
    feedback.insert(
        "decision.zustand".to_string(),
        FeedbackTemplate::success(
            "You chose Zustand.\n\n\
             Excellent choice:\n\
             - Minimal, intuitive API\n\
             - Granular state selection (no extra re-renders)\n\
             - TypeScript first\n\n\
             Trade-offs:\n\
             - External dependency (3kb gzipped)\n\
             - Less \"React-like\"\n\n\
             Creating stores/cartStore.ts...",
        ),
    );
    feedback.insert(
        "decision.localstorage".to_string(),
        FeedbackTemplate::success(
            "You chose LocalStorage + custom hook.\n\n\
             A pragmatic choice:\n\
             - Automatic persistence\n\
             - Works offline\n\
             - Zero dependencies\n\n\
             Trade-offs:\n\
             - Cross-tab sync needs extra code\n\
             - 5MB per-origin limit\n\n\
             Creating hooks/usePersistedCart.ts...",
        ),
    );
    feedback.insert(
        "break-fix.hint".to_string(),
        FeedbackTemplate::success(
            "Analyzing the error...\n\n\
             \"Cannot read property 'map' of undefined\" means you are iterating over \
             something that is `undefined`.\n\n\
             When consuming data from a hook or context, make sure it exists before \
             using it. Consider:\n\
             - Default values\n\
             - Optional chaining (`?.`)\n\
             - Early return with a loading state",
        ),
    );
    feedback.insert(
        "break-fix.success".to_string(),
        FeedbackTemplate::success(
            "Bug fixed! The project runs again.\n\n\
             You applied defensive coding:\n\
             - A fallback for the empty array\n\
             - Or optional chaining\n\n\
             The lesson here: **never trust that external data exists**. Always \
             validate before use.",
        ),
    );
    feedback.insert(
        "break-fix.failure".to_string(),
        FeedbackTemplate::failure(
            "Still crashing with the same TypeError.\n\n\
             The array you iterate over can be `undefined` on first render. Guard the \
             access with optional chaining (`?.`) or give it a default (`|| []`), \
             then test again.",
        ),
    );
    feedback.insert(
        "video-challenge.success".to_string(),
        FeedbackTemplate::success(
            "Nice work! You applied the pattern from the video.\n\n\
             `useMemo` now caches the filtered list, so typing in the filter box no \
             longer recomputes everything on unrelated renders.",
        ),
    );
    feedback.insert(
        "visual-implementation.success".to_string(),
        FeedbackTemplate::success(
            "The badge matches the approved design.\n\n\
             Red background, white caps, soft shadow and the pulse animation are all \
             in place. Pixel-perfect enough to ship.",
        ),
    );
    feedback.insert(
        "read-choose.success".to_string(),
        FeedbackTemplate::success(
            "Correct! That is exactly what the snippet does.\n\n\
             Reading code precisely before changing it is half the job.",
        ),
    );
    feedback.insert(
        "read-choose.failure".to_string(),
        FeedbackTemplate::failure(
            "Not quite. Re-read the snippet and trace what each line evaluates to \
             before picking again.",
        ),
    );
    feedback.insert(
        DEFAULT_SUCCESS_KEY.to_string(),
        FeedbackTemplate::success("Well done! Activity complete. Next activity unlocked!"),
    );
    feedback.insert(
        DEFAULT_FAILURE_KEY.to_string(),
        FeedbackTemplate::failure("Almost there! Review the instructions and try again."),
    );

    feedback
}

const HEADER_GENERATED_CODE: &str = r#"import React from 'react';

function Header() {
  return (
    <div style={{background: 'white', padding: '20px'}}>
      <img src="/logo.png" />
      <div>
        <a href="/">Home</a>
        <a href="/products">Products</a>
        <a href="/cart">Cart (3)</a>
      </div>
    </div>
  )
}

export default Header;"#;

const APP_CODE: &str = r#"import { Header } from './components/Header';
import { ProductGrid } from './components/ProductGrid';

export default function App() {
  return (
    <div className="min-h-screen bg-white">
      <Header />
      <main className="container mx-auto px-4 py-8">
        <ProductGrid />
      </main>
    </div>
  );
}"#;

const PRODUCT_CARD_CODE: &str = r#"import { useState } from 'react';

interface ProductCardProps {
  id: string;
  name: string;
  price: number;
  image: string;
  description: string;
}

export function ProductCard({ id, name, price, image, description }: ProductCardProps) {
  const [quantity, setQuantity] = useState(1);

  // Problem: recomputed on every render
  const formattedPrice = new Intl.NumberFormat('en-US', {
    style: 'currency',
    currency: 'USD',
  }).format(price);

  // Problem: new function on every render
  const handleAddToCart = () => {
    console.log('Adding to cart:', { id, quantity });
  };

  return (
    <div className="bg-white border rounded-lg overflow-hidden">
      <img src={image} alt={name} className="w-full h-48 object-cover" />
      <div className="p-4">
        <h3 className="font-bold">{name}</h3>
        <p className="text-gray-600 text-sm mt-1">{description}</p>
        <p className="text-xl font-bold mt-2">{formattedPrice}</p>
        <button onClick={handleAddToCart} className="w-full bg-black text-white py-2 rounded">
          Add to cart
        </button>
      </div>
    </div>
  );
}"#;

const PRODUCT_GRID_CODE: &str = r#"import { ProductCard } from './ProductCard';

const products = [
  { id: '1', name: 'Pro Boxing Gloves', price: 59.90, image: '/products/gloves.jpg', description: '14oz professional gloves' },
  { id: '2', name: 'Heavy Bag 1.2m', price: 129.90, image: '/products/bag.jpg', description: 'Professional filled heavy bag' },
  { id: '3', name: 'Hand Wraps 5m', price: 9.90, image: '/products/wrap.jpg', description: 'Pair of elastic hand wraps' },
  { id: '4', name: 'Mouthguard', price: 14.90, image: '/products/mouthguard.jpg', description: 'Premium moldable mouthguard' },
];

export function ProductGrid() {
  return (
    <div>
      <h2 className="text-2xl font-bold mb-6">Boxing Gear</h2>
      <div className="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
        {products.map((product) => (
          <ProductCard key={product.id} {...product} />
        ))}
      </div>
    </div>
  );
}"#;

const CHECKOUT_BROKEN_CODE: &str = r#"// Intentionally buggy code
import { useCart } from '@/hooks/useCart';

export function CheckoutPage() {
  const { items } = useCart(); // items may be undefined!

  const total = items.map(item => item.price * item.quantity)
    .reduce((a, b) => a + b, 0);

  return (
    <div className="checkout">
      <h1>Checkout</h1>
      {items.map(item => (
        <div key={item.id}>
          {item.name} - ${item.price}
        </div>
      ))}
      <p>Total: ${total}</p>
    </div>
  );
}"#;

const PRODUCT_LIST_CODE: &str = r#"import { useState } from 'react';

interface Product {
  id: string;
  name: string;
  price: number;
  category: string;
}

export function ProductList({ products }: { products: Product[] }) {
  const [filter, setFilter] = useState('');

  // TODO: optimize with useMemo
  const filteredProducts = products.filter(p =>
    p.name.toLowerCase().includes(filter.toLowerCase())
  );

  const total = filteredProducts.reduce((sum, p) => sum + p.price, 0);

  return (
    <div>
      <input
        value={filter}
        onChange={e => setFilter(e.target.value)}
        placeholder="Filter products..."
      />
      <p>Total: ${total.toFixed(2)}</p>
      {filteredProducts.map(p => (
        <div key={p.id}>{p.name} - ${p.price}</div>
      ))}
    </div>
  );
}"#;

const PROMO_BADGE_CODE: &str = r#"// Implement the promo badge
export function PromoBadge() {
  return (
    <span className="promo-badge">
      {/* TODO: style to match the reference */}
      SALE
    </span>
  );
}

// Expected CSS:
// - Vibrant red background
// - White caps text
// - Soft shadow
// - Subtle pulse animation"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.lessons.len(), 1);
        assert_eq!(catalog.activities_for("lesson-1").len(), 6);
    }

    #[test]
    fn builtin_catalog_carries_both_fallback_templates() {
        let catalog = Catalog::builtin();
        let success = catalog
            .template(DEFAULT_SUCCESS_KEY)
            .expect("missing default success template");
        assert!(success.is_success);
        let failure = catalog
            .template(DEFAULT_FAILURE_KEY)
            .expect("missing default failure template");
        assert!(!failure.is_success);
        assert!(catalog.template("no-such-key").is_none());
    }

    #[test]
    fn builtin_catalog_round_trips_through_json() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json().expect("serialize");
        let parsed = Catalog::from_json(&json).expect("parse");
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn validate_rejects_duplicate_activity_ids() {
        let mut catalog = Catalog::builtin();
        let mut dup = catalog.activities[1].clone();
        dup.id = catalog.activities[0].id.clone();
        catalog.activities[1] = dup;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn validate_rejects_second_current_activity() {
        let mut catalog = Catalog::builtin();
        catalog.activities[2].status = ActivityStatus::Current;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_file_paths() {
        let mut catalog = Catalog::builtin();
        let dup = catalog.project.files[0].clone();
        catalog.project.files.push(dup);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn unknown_lesson_lookup_fails() {
        let catalog = Catalog::builtin();
        assert!(catalog.lesson("lesson-99").is_err());
    }
}
