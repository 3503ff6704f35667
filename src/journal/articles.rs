use crate::content::{
    callout, code, code_block, em, heading, image, list, paragraph, quote, rich, rich_list,
    strong, subheading, text, CalloutKind, ContentBlock, Document, ImageSize,
};

pub fn state_management() -> Document {
    vec![
        paragraph("Recently, I encountered a challenging issue while working on a large-scale React application. The state management was becoming increasingly complex, and I needed to find a better solution that could scale with our growing codebase."),
        callout(
            CalloutKind::Warning,
            [text("When your component tree gets deep and state updates become unpredictable, it's time to rethink your architecture.")],
        ),
        heading("The Problem"),
        paragraph("Our application had multiple features that needed to share state across distant components. Props drilling was becoming a nightmare, and useContext wasn't performing well with frequent updates."),
        list([
            "Component re-renders were happening too frequently",
            "State updates were difficult to track and debug",
            "The codebase was becoming hard to maintain",
            "Team members were confused about where to put new state",
        ]),
        image(
            "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800",
            "Code on screen",
            Some("Analyzing the component tree helped identify performance bottlenecks"),
            ImageSize::Full,
        ),
        heading("The Solution"),
        paragraph("After researching different approaches including Redux, Zustand, and Jotai, I implemented a custom hook pattern combined with Zustand for global state. Here's the pattern I discovered:"),
        code_block(
            Some("useOptimizedState.ts"),
            Some("typescript"),
            r#"import { useCallback, useRef, useState } from 'react';

export function useOptimizedState<T>(initialValue: T) {
  const [state, setState] = useState(initialValue);
  const stateRef = useRef(state);

  const setOptimizedState = useCallback((value: T | ((prev: T) => T)) => {
    setState((prev) => {
      const newValue = value instanceof Function ? value(prev) : value;
      stateRef.current = newValue;
      return newValue;
    });
  }, []);

  return [state, setOptimizedState, stateRef] as const;
}"#,
        ),
        paragraph("This hook provides both the state value and a ref, allowing us to access the latest value without causing unnecessary re-renders in event handlers and async functions."),
        callout(
            CalloutKind::Success,
            [text("After implementing this pattern alongside Zustand for global state, we saw a 40% reduction in unnecessary re-renders and a significant improvement in application performance.")],
        ),
        ContentBlock::Divider,
        heading("Key Takeaways"),
        list([
            "Always measure performance before and after optimization",
            "Understanding React's rendering behavior is crucial for large apps",
            "Custom hooks can encapsulate complex logic effectively",
            "Choose the right tool for the job - not every app needs Redux",
            "Documentation and code comments are essential for team collaboration",
        ]),
        quote("\"The best code is not the cleverest code, but the code that is easiest to understand and maintain.\""),
    ]
}

pub fn performance_optimization() -> Document {
    vec![
        paragraph("Performance optimization is one of those topics that sounds scary but can have massive impact. Let me share how I reduced load time by 60% in a production app."),
        heading("Where I Started"),
        paragraph("The app was slow. Users were complaining, and our analytics showed high bounce rates on the landing page. Time to investigate."),
        callout(
            CalloutKind::Info,
            [text("Always start with measurement. Use Chrome DevTools, Lighthouse, and Web Vitals to identify actual bottlenecks before optimizing.")],
        ),
        subheading("Initial Metrics"),
        list([
            "First Contentful Paint: 3.2s",
            "Largest Contentful Paint: 5.8s",
            "Time to Interactive: 7.1s",
            "Bundle size: 850KB gzipped",
        ]),
        heading("Optimization Strategies"),
        subheading("1. Code Splitting"),
        code_block(
            Some("App.tsx"),
            Some("typescript"),
            r#"import { lazy, Suspense } from 'react';

// Instead of importing everything at once
// import Dashboard from './pages/Dashboard';
// import Settings from './pages/Settings';

// Lazy load route components
const Dashboard = lazy(() => import('./pages/Dashboard'));
const Settings = lazy(() => import('./pages/Settings'));

function App() {
  return (
    <Suspense fallback={<LoadingSpinner />}>
      <Routes>
        <Route path="/dashboard" element={<Dashboard />} />
        <Route path="/settings" element={<Settings />} />
      </Routes>
    </Suspense>
  );
}"#,
        ),
        subheading("2. Image Optimization"),
        paragraph("Images were the biggest culprit. I implemented next/image for automatic optimization and WebP format support."),
        image(
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800",
            "Performance metrics",
            Some("Before and after comparison of Web Vitals scores"),
            ImageSize::Full,
        ),
        subheading("3. Lazy Loading Components"),
        code_block(
            Some("LazyComponent.tsx"),
            Some("typescript"),
            r#"import { useEffect, useRef, useState } from 'react';

function useInView() {
  const ref = useRef<HTMLDivElement>(null);
  const [isInView, setIsInView] = useState(false);

  useEffect(() => {
    const observer = new IntersectionObserver(
      ([entry]) => setIsInView(entry.isIntersecting),
      { rootMargin: '100px' }
    );

    if (ref.current) observer.observe(ref.current);
    return () => observer.disconnect();
  }, []);

  return { ref, isInView };
}

export function HeavyComponent() {
  const { ref, isInView } = useInView();

  return (
    <div ref={ref}>
      {isInView ? <ActualHeavyContent /> : <Skeleton />}
    </div>
  );
}"#,
        ),
        callout(
            CalloutKind::Success,
            [text("Final Results: FCP 1.2s, LCP 2.1s, TTI 2.8s, Bundle 320KB. User engagement increased by 45%.")],
        ),
        ContentBlock::Divider,
        quote("\"Performance is not just about speed - it's about user experience and business outcomes.\""),
    ]
}

pub fn typescript_patterns() -> Document {
    vec![
        paragraph("TypeScript has transformed how I write JavaScript. Here are the advanced patterns that have made the biggest difference in my code quality."),
        heading("Pattern 1: Discriminated Unions"),
        paragraph("This pattern helps create type-safe state machines and API responses."),
        code_block(
            Some("types.ts"),
            None,
            r#"type LoadingState = {
  status: 'loading';
  data: null;
  error: null;
};

type SuccessState<T> = {
  status: 'success';
  data: T;
  error: null;
};

type ErrorState = {
  status: 'error';
  data: null;
  error: Error;
};

type AsyncState<T> = LoadingState | SuccessState<T> | ErrorState;

function handleState<T>(state: AsyncState<T>) {
  switch (state.status) {
    case 'loading':
      return <Spinner />;
    case 'success':
      // TypeScript knows data is T here!
      return <Display data={state.data} />;
    case 'error':
      // TypeScript knows error exists here!
      return <Error message={state.error.message} />;
  }
}"#,
        ),
        callout(
            CalloutKind::Info,
            [text("Discriminated unions eliminate runtime errors by making invalid states unrepresentable.")],
        ),
        heading("Pattern 2: Generic Constraints"),
        code_block(
            Some("generics.ts"),
            None,
            r#"interface WithId {
  id: string;
}

function findById<T extends WithId>(items: T[], id: string): T | undefined {
  return items.find(item => item.id === id);
}

// Works with any type that has an id
const user = findById(users, '123');
const post = findById(posts, '456');"#,
        ),
        heading("Pattern 3: Template Literal Types"),
        code_block(
            Some("template-literals.ts"),
            None,
            r#"type Theme = 'light' | 'dark';
type Size = 'sm' | 'md' | 'lg';

// Creates: 'light-sm' | 'light-md' | 'light-lg' | 'dark-sm' | ...
type VariantKey = `${Theme}-${Size}`;

const variants: Record<VariantKey, string> = {
  'light-sm': 'bg-white text-xs',
  'light-md': 'bg-white text-sm',
  'light-lg': 'bg-white text-base',
  'dark-sm': 'bg-black text-xs',
  'dark-md': 'bg-black text-sm',
  'dark-lg': 'bg-black text-base',
};"#,
        ),
        ContentBlock::Divider,
        list([
            "Use discriminated unions for state management",
            "Leverage generic constraints to make APIs type-safe",
            "Template literals create powerful type combinations",
            "Always prefer types over interfaces for unions",
        ]),
        quote("\"Strong typing isn't about restricting what you can do - it's about expressing intent clearly.\""),
    ]
}

pub fn snt_concurrency() -> Document {
    vec![
        rich([
            text("In building "),
            strong("SeetaNarayan Travels"),
            text(", the most critical challenge wasn't visible on the screen. It was in the database. When dealing with real-time travel bookings, the margin for error is zero. A \"double booking\" (two users booking the same seat simultaneously) isn't just a bug; it's a broken promise to a customer who might be left stranded."),
        ]),
        callout(
            CalloutKind::Info,
            [
                text("In distributed systems, "),
                strong("Correctness"),
                text(" often competes with "),
                strong("Performance"),
                text(". The art of engineering is balancing the two without compromising the user experience."),
            ],
        ),
        heading("The Invisible Problem: Race Conditions"),
        rich([
            text("During load testing, we discovered a critical \"check-then-act\" race condition. Standard validation logic checks if a seat is available and "),
            em("then"),
            text(" books it. However, in the milliseconds between the "),
            code("READ"),
            text(" and the "),
            code("WRITE"),
            text(", another request could slip in."),
        ]),
        paragraph("In a high-concurrency environment, this standard approach fails:"),
        code_block(
            Some("unsafe-booking.ts"),
            Some("typescript"),
            r#"// ❌ THE NAIVE APPROACH (Vulnerable to Race Conditions)
async function bookSeat(vehicleId, seatNumber, userId) {
  // 1. Check availability
  const isAvailable = await db.checkSeat(vehicleId, seatNumber);

  if (!isAvailable) {
    throw new Error('Seat taken');
  }

  // 🔴 RACE CONDITION WINDOW: Another request can book here!

  // 2. Book the seat
  return await db.createBooking(vehicleId, seatNumber, userId);
}"#,
        ),
        rich([
            text("This is a classic concurrency anomaly. With standard PostgreSQL "),
            code("READ COMMITTED"),
            text(" isolation, both transactions see the seat as \"free\" before either commits."),
        ]),
        heading("The Solution: Pessimistic Locking"),
        rich([
            text("To solve this with absolute certainty, I implemented "),
            strong("Pessimistic Locking"),
            text(" using PostgreSQL's "),
            code("SELECT ... FOR UPDATE"),
            text(". This forces the database to lock the specific row (inventory item) for the duration of the transaction, effectively serializing access to that specific seat without locking the entire table."),
        ]),
        code_block(
            Some("transaction-manager.ts"),
            Some("typescript"),
            r#"// ✅ THE ROBUST APPROACH
async function bookSeatSecurely(vehicleId, seatNumber, userId) {
  return await db.transaction(async (trx) => {
    // 1. Lock the specific row for this transaction
    // "FOR UPDATE" prevents other transactions from modifying this row
    const seat = await trx('inventory')
      .where({ vehicle_id: vehicleId, seat_number: seatNumber })
      .forUpdate() // 🔒 The Magic Line
      .first();

    if (seat.status !== 'AVAILABLE') {
      throw new Error('Seat unavailable');
    }

    // 2. Process Booking
    const booking = await trx('bookings').insert({
      vehicle_id: vehicleId,
      seat_number: seatNumber,
      user_id: userId,
      status: 'CONFIRMED'
    });

    // 3. Update Inventory
    await trx('inventory')
      .where({ id: seat.id })
      .update({ status: 'BOOKED' });

    return booking;
  });
}"#,
        ),
        callout(
            CalloutKind::Success,
            [
                text("By utilizing database-level row locking, we guaranteed "),
                strong("ACID compliance"),
                text(" for every booking. Zero double bookings, regardless of traffic spikes."),
            ],
        ),
        heading("Optimizing the User Experience"),
        rich([
            text("Solving the backend problem created a frontend challenge: latency. Locking rows introduces wait times. To mask this, I implemented an "),
            strong("Optimistic UI"),
            text(" pattern handling specifically for the "),
            code("409 Conflict"),
            text(" status code."),
        ]),
        image(
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=1000&auto=format&fit=crop",
            "Server Architecture Diagram",
            Some("Balancing strong consistency on the backend with eventual consistency on the frontend."),
            ImageSize::Full,
        ),
        paragraph("If a lock contention occurs or a booking fails due to a race condition (which is now caught safely), the UI needs to handle it gracefully without crashing or confusing the user."),
        code_block(
            Some("useBooking.ts"),
            Some("typescript"),
            r#"// Handling the edge case gracefully in the UI
const handleBooking = async (seatId: string) => {
  // 1. Optimistic Update: Visually reserve immediately
  setSeatStatus(seatId, 'RESERVED');

  try {
    await api.bookSeat(seatId);
    toast.success('Booking Confirmed!');
  } catch (error) {
    // 2. Rollback on failure
    setSeatStatus(seatId, 'AVAILABLE');

    // 3. Specific handling for concurrency conflicts
    if (error.status === 409) {
      toast.error('Someone just snatched this seat! Please choose another.');
      // Automatically refresh inventory to show latest state
      refreshInventory();
    } else {
      toast.error('Booking failed. Please try again.');
    }
  }
};"#,
        ),
        ContentBlock::Divider,
        heading("Key Takeaways"),
        rich_list([
            vec![
                strong("Data Integrity is Paramount:"),
                text(" In e-commerce/booking, \"mostly correct\" is not enough."),
            ],
            vec![
                strong("Know Your Database:"),
                text(" Understanding transaction isolation levels (Read Committed vs. Serializable) is a senior-level skill."),
            ],
            vec![
                strong("Fail Gracefully:"),
                text(" A race condition isn't a system crash; it's a business logic state that needs a specific UI response."),
            ],
        ]),
        quote("\"True optimization isn't just making things faster; it's making them robust enough to handle the chaos of the real world.\""),
    ]
}
