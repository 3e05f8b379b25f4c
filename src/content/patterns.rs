//! The nine design patterns with a detail page
//!
//! [`PATTERNS`] is ordered like [`PatternId::ALL`], so a pattern is looked up
//! by the id's position.

use super::{Category, CodeSample, Level, PatternExample, PatternInfo};
use crate::routes::PatternId;

/// Detail content for `id`
pub fn pattern(id: PatternId) -> &'static PatternInfo {
    &PATTERNS[id as usize]
}

/// Patterns of one category, in index order
pub fn by_category(category: Category) -> impl Iterator<Item = &'static PatternInfo> {
    PATTERNS.iter().filter(move |p| p.category == category)
}

pub static PATTERNS: [PatternInfo; 9] = [
    PatternInfo {
        id: PatternId::Singleton,
        name: "Singleton",
        summary: "Ensures a class has only one instance and provides a global point of access to it.",
        category: Category::Creational,
        level: Level::Beginner,
        intent: "The Singleton Pattern ensures a class has only one instance and provides a global point of access to it. This is useful when exactly one object is needed to coordinate actions across the system.",
        problem: &[
            "Ensure that a class has only one instance.",
            "Provide a global access point to that instance.",
        ],
        when_to_use: &[
            "When exactly one instance of a class is needed to coordinate actions across the system.",
            "When you need stricter control over global variables.",
            "For shared resources such as a database connection or a file manager.",
        ],
        implementation: CodeSample {
            title: "Basic Implementation",
            language: "typescript",
            code: "class Singleton {
  private static instance: Singleton;

  private constructor() {}

  public static getInstance(): Singleton {
    if (!Singleton.instance) {
      Singleton.instance = new Singleton();
    }
    return Singleton.instance;
  }
}

const a = Singleton.getInstance();
const b = Singleton.getInstance();
console.log(a === b); // true",
        },
        examples: &[PatternExample {
            title: "Database Connection",
            description: "A common use case for the Singleton pattern is to manage database connections.",
            sample: CodeSample {
                title: "DatabaseConnection",
                language: "typescript",
                code: "class DatabaseConnection {
  private static instance: DatabaseConnection;

  private constructor() {}

  public static getInstance(): DatabaseConnection {
    if (!DatabaseConnection.instance) {
      DatabaseConnection.instance = new DatabaseConnection();
    }
    return DatabaseConnection.instance;
  }

  public query(sql: string) {
    console.log(`Executing query: ${sql}`);
  }
}

DatabaseConnection.getInstance().query('SELECT * FROM users');",
            },
        }],
        pros: &[
            "You can be sure that a class has only one instance.",
            "You gain a global access point to that instance.",
            "The singleton object is initialized only when it's requested for the first time.",
        ],
        cons: &[
            "Violates the Single Responsibility Principle. The pattern solves two problems at the time.",
            "Can mask bad design, for instance, when the components of the program know too much about each other.",
            "Requires special treatment in a multithreaded environment.",
            "Unit testing can be difficult since many test frameworks rely on inheritance when producing mock objects.",
        ],
    },
    PatternInfo {
        id: PatternId::FactoryMethod,
        name: "Factory Method",
        summary: "Defines an interface for creating an object, but lets subclasses decide which class to instantiate.",
        category: Category::Creational,
        level: Level::Beginner,
        intent: "Factory Method provides an interface for creating objects in a superclass, but allows subclasses to alter the type of objects that will be created.",
        problem: &[
            "Code that creates objects directly is coupled to concrete classes.",
            "Adding a new product type means editing every place that constructs one.",
        ],
        when_to_use: &[
            "When you don't know beforehand the exact types of objects your code should work with.",
            "When you want to let users of a library extend its internal components.",
            "When you want to reuse existing objects instead of rebuilding them each time.",
        ],
        implementation: CodeSample {
            title: "Logistics Example",
            language: "typescript",
            code: "interface Transport {
  deliver(): void;
}

class Truck implements Transport {
  deliver() { console.log('Deliver by land in a box'); }
}

class Ship implements Transport {
  deliver() { console.log('Deliver by sea in a container'); }
}

abstract class Logistics {
  abstract createTransport(): Transport;

  planDelivery() {
    const transport = this.createTransport();
    transport.deliver();
  }
}

class RoadLogistics extends Logistics {
  createTransport(): Transport { return new Truck(); }
}

new RoadLogistics().planDelivery();",
        },
        examples: &[PatternExample {
            title: "UI Dialogs",
            description: "A dialog creates platform-specific buttons without knowing their concrete classes.",
            sample: CodeSample {
                title: "Dialog",
                language: "java",
                code: "abstract class Dialog {
    abstract Button createButton();

    void render() {
        Button ok = createButton();
        ok.render();
    }
}

class WindowsDialog extends Dialog {
    Button createButton() { return new WindowsButton(); }
}",
            },
        }],
        pros: &[
            "Avoids tight coupling between the creator and the concrete products.",
            "Single Responsibility Principle: product creation lives in one place.",
            "Open/Closed Principle: new product types don't break existing client code.",
        ],
        cons: &["The code may become more complicated since you need many new subclasses."],
    },
    PatternInfo {
        id: PatternId::Builder,
        name: "Builder",
        summary: "Separates the construction of a complex object from its representation.",
        category: Category::Creational,
        level: Level::Intermediate,
        intent: "Builder lets you construct complex objects step by step, producing different representations with the same construction code.",
        problem: &[
            "Objects with many optional parts end up with huge constructors.",
            "Creating subclasses for every combination of parameters does not scale.",
        ],
        when_to_use: &[
            "To get rid of a telescoping constructor.",
            "When the same construction process should build different representations.",
            "To construct composite trees or other complex objects.",
        ],
        implementation: CodeSample {
            title: "Query Builder",
            language: "typescript",
            code: "class QueryBuilder {
  private parts: string[] = [];

  select(fields: string): this {
    this.parts.push(`SELECT ${fields}`);
    return this;
  }

  from(table: string): this {
    this.parts.push(`FROM ${table}`);
    return this;
  }

  where(condition: string): this {
    this.parts.push(`WHERE ${condition}`);
    return this;
  }

  build(): string {
    return this.parts.join(' ');
  }
}

const sql = new QueryBuilder().select('*').from('users').where('id = 1').build();
console.log(sql);",
        },
        examples: &[PatternExample {
            title: "Building a House",
            description: "A director runs the same steps against different builders to get different houses.",
            sample: CodeSample {
                title: "HouseBuilder",
                language: "typescript",
                code: "interface HouseBuilder {
  buildWalls(): void;
  buildRoof(): void;
  buildGarage(): void;
}

class Director {
  constructLuxuryHouse(builder: HouseBuilder) {
    builder.buildWalls();
    builder.buildRoof();
    builder.buildGarage();
  }
}",
            },
        }],
        pros: &[
            "You can construct objects step-by-step or defer construction steps.",
            "The same construction code can build various representations.",
            "Complex construction code is isolated from business logic.",
        ],
        cons: &["The overall complexity increases since the pattern requires multiple new classes."],
    },
    PatternInfo {
        id: PatternId::Adapter,
        name: "Adapter",
        summary: "Allows incompatible interfaces to work together by wrapping an instance of one class into an adapter.",
        category: Category::Structural,
        level: Level::Beginner,
        intent: "Adapter converts the interface of a class into another interface clients expect, letting classes work together that couldn't otherwise.",
        problem: &[
            "A useful class exposes an interface the rest of the application cannot call.",
            "Changing the class is impossible or would break its other users.",
        ],
        when_to_use: &[
            "When you want to use an existing class with an incompatible interface.",
            "When you integrate a third-party or legacy library.",
        ],
        implementation: CodeSample {
            title: "XML to JSON Adapter",
            language: "typescript",
            code: "interface JsonAnalytics {
  analyze(json: object): void;
}

class XmlProvider {
  getXml(): string { return '<stock>42</stock>'; }
}

class XmlToJsonAdapter implements JsonAnalytics {
  constructor(private provider: XmlProvider) {}

  analyze(_json: object): void {
    const xml = this.provider.getXml();
    console.log(`Converted ${xml} to JSON and analyzed it`);
  }
}

new XmlToJsonAdapter(new XmlProvider()).analyze({});",
        },
        examples: &[PatternExample {
            title: "Payment Gateways",
            description: "Wrap each vendor SDK so the checkout only talks to one PaymentProcessor interface.",
            sample: CodeSample {
                title: "PaymentAdapter",
                language: "python",
                code: "class StripeAdapter(PaymentProcessor):
    def __init__(self, client):
        self.client = client

    def pay(self, amount):
        self.client.create_charge(amount_cents=int(amount * 100))",
            },
        }],
        pros: &[
            "Single Responsibility Principle: interface conversion is separated from business logic.",
            "Open/Closed Principle: new adapters can be introduced without breaking client code.",
        ],
        cons: &["The overall complexity of the code increases because you need to introduce new interfaces and classes."],
    },
    PatternInfo {
        id: PatternId::Composite,
        name: "Composite",
        summary: "Composes objects into tree structures to represent part-whole hierarchies.",
        category: Category::Structural,
        level: Level::Intermediate,
        intent: "Composite lets clients treat individual objects and compositions of objects uniformly.",
        problem: &[
            "The model is a tree: boxes contain products and other boxes.",
            "Computing a total requires knowing the class of every nested element.",
        ],
        when_to_use: &[
            "When you have to implement a tree-like object structure.",
            "When clients should treat simple and complex elements uniformly.",
        ],
        implementation: CodeSample {
            title: "File System Tree",
            language: "typescript",
            code: "interface Node {
  size(): number;
}

class FileNode implements Node {
  constructor(private bytes: number) {}
  size() { return this.bytes; }
}

class Folder implements Node {
  private children: Node[] = [];

  add(child: Node) { this.children.push(child); }

  size() {
    return this.children.reduce((sum, c) => sum + c.size(), 0);
  }
}

const root = new Folder();
root.add(new FileNode(120));
root.add(new FileNode(80));
console.log(root.size()); // 200",
        },
        examples: &[PatternExample {
            title: "UI Component Trees",
            description: "Containers and widgets share a render() method, so a window renders its whole tree with one call.",
            sample: CodeSample {
                title: "Panel",
                language: "typescript",
                code: "class Panel implements Component {
  private children: Component[] = [];

  render(): void {
    this.children.forEach(child => child.render());
  }
}",
            },
        }],
        pros: &[
            "You can work with complex tree structures more conveniently using polymorphism and recursion.",
            "Open/Closed Principle: new element types work with the existing tree.",
        ],
        cons: &["It might be difficult to provide a common interface for classes whose functionality differs too much."],
    },
    PatternInfo {
        id: PatternId::Proxy,
        name: "Proxy",
        summary: "Provides a surrogate or placeholder for another object to control access to it.",
        category: Category::Structural,
        level: Level::Intermediate,
        intent: "Proxy provides a substitute for another object and controls access to it, so something can happen before or after the request reaches the original.",
        problem: &[
            "A heavyweight object is needed only occasionally.",
            "Lazy initialization, caching or access checks would otherwise be duplicated across clients.",
        ],
        when_to_use: &[
            "Lazy initialization (virtual proxy).",
            "Access control (protection proxy).",
            "Caching request results (caching proxy).",
            "Logging requests (logging proxy).",
        ],
        implementation: CodeSample {
            title: "Caching Proxy",
            language: "typescript",
            code: "interface VideoService {
  getVideo(id: string): string;
}

class RemoteVideoService implements VideoService {
  getVideo(id: string) {
    console.log(`Downloading video ${id}`);
    return `video-${id}`;
  }
}

class CachedVideoService implements VideoService {
  private cache = new Map<string, string>();

  constructor(private service: VideoService) {}

  getVideo(id: string) {
    if (!this.cache.has(id)) {
      this.cache.set(id, this.service.getVideo(id));
    }
    return this.cache.get(id)!;
  }
}",
        },
        examples: &[PatternExample {
            title: "Access Control",
            description: "A protection proxy checks permissions before forwarding calls to the real document store.",
            sample: CodeSample {
                title: "ProtectedDocuments",
                language: "typescript",
                code: "class ProtectedDocuments implements Documents {
  constructor(private inner: Documents, private user: User) {}

  read(id: string): string {
    if (!this.user.canRead(id)) {
      throw new Error('Access denied');
    }
    return this.inner.read(id);
  }
}",
            },
        }],
        pros: &[
            "You can control the service object without clients knowing about it.",
            "The proxy works even if the service object isn't ready or available.",
            "Open/Closed Principle: new proxies can be introduced without changing the service.",
        ],
        cons: &[
            "The code may become more complicated since you need to introduce many new classes.",
            "The response from the service might get delayed.",
        ],
    },
    PatternInfo {
        id: PatternId::Observer,
        name: "Observer",
        summary: "Defines a one-to-many dependency between objects so that when one object changes state, all its dependents are notified.",
        category: Category::Behavioral,
        level: Level::Beginner,
        intent: "The Observer pattern defines a one-to-many dependency between objects so that when one object changes state, all its dependents are notified and updated automatically.",
        problem: &[
            "A customer could check the store every day for a product, wasting trips while it is unavailable.",
            "The store could notify every customer about every product, spamming people who don't care.",
        ],
        when_to_use: &[
            "When changes to the state of one object may require changing other objects.",
            "When the set of interested objects is unknown beforehand or changes dynamically.",
        ],
        implementation: CodeSample {
            title: "Weather Station",
            language: "typescript",
            code: "interface Observer {
  update(temperature: number): void;
}

class WeatherStation {
  private observers: Observer[] = [];

  attach(observer: Observer) { this.observers.push(observer); }

  detach(observer: Observer) {
    this.observers = this.observers.filter(o => o !== observer);
  }

  setTemperature(value: number) {
    this.observers.forEach(o => o.update(value));
  }
}

class PhoneDisplay implements Observer {
  update(t: number) { console.log(`Phone: ${t}°C`); }
}

const station = new WeatherStation();
station.attach(new PhoneDisplay());
station.setTemperature(21);",
        },
        examples: &[PatternExample {
            title: "Event Listeners",
            description: "DOM event listeners are observers subscribed to an element's event stream.",
            sample: CodeSample {
                title: "addEventListener",
                language: "javascript",
                code: "const button = document.querySelector('#save');

button.addEventListener('click', () => {
  console.log('Saving...');
});",
            },
        }],
        pros: &[
            "Open/Closed Principle: new subscribers don't require changing the publisher.",
            "You can establish relations between objects at runtime.",
        ],
        cons: &["Subscribers are notified in random order."],
    },
    PatternInfo {
        id: PatternId::Strategy,
        name: "Strategy",
        summary: "Define a family of algorithms, encapsulate each one, and make them interchangeable.",
        category: Category::Behavioral,
        level: Level::Intermediate,
        intent: "Strategy defines a family of algorithms, puts each of them into a separate class, and makes their objects interchangeable.",
        problem: &[
            "A navigation app keeps adding routing algorithms to one ever-growing class.",
            "Every change to one algorithm risks breaking the others.",
        ],
        when_to_use: &[
            "When you want to use different variants of an algorithm and switch at runtime.",
            "When you have many similar classes that differ only in how they execute a behavior.",
            "To isolate business logic from algorithm implementation details.",
        ],
        implementation: CodeSample {
            title: "Payment Strategies",
            language: "typescript",
            code: "interface PaymentStrategy {
  pay(amount: number): void;
}

class CreditCardPayment implements PaymentStrategy {
  pay(amount: number) { console.log(`Paid ${amount} with credit card`); }
}

class PayPalPayment implements PaymentStrategy {
  pay(amount: number) { console.log(`Paid ${amount} with PayPal`); }
}

class Checkout {
  constructor(private strategy: PaymentStrategy) {}

  setStrategy(strategy: PaymentStrategy) { this.strategy = strategy; }

  complete(amount: number) { this.strategy.pay(amount); }
}

const checkout = new Checkout(new CreditCardPayment());
checkout.complete(100);
checkout.setStrategy(new PayPalPayment());
checkout.complete(50);",
        },
        examples: &[PatternExample {
            title: "Sorting",
            description: "Comparator functions are strategies passed to a generic sort.",
            sample: CodeSample {
                title: "Comparators",
                language: "csharp",
                code: "var byName = new Comparison<User>((a, b) => a.Name.CompareTo(b.Name));
var byAge = new Comparison<User>((a, b) => a.Age.CompareTo(b.Age));

users.Sort(sortByAge ? byAge : byName);",
            },
        }],
        pros: &[
            "You can swap algorithms used inside an object at runtime.",
            "Implementation details of an algorithm are isolated from the code that uses it.",
            "Open/Closed Principle: new strategies don't change the context.",
        ],
        cons: &[
            "Overkill when you only have a couple of algorithms that rarely change.",
            "Clients must be aware of the differences between strategies to select a proper one.",
        ],
    },
    PatternInfo {
        id: PatternId::Command,
        name: "Command",
        summary: "Encapsulates a request as an object, allowing you to parameterize clients with different requests.",
        category: Category::Behavioral,
        level: Level::Advanced,
        intent: "Command turns a request into a stand-alone object that contains all information about the request, enabling queuing, logging and undo.",
        problem: &[
            "Buttons, menu items and shortcuts all trigger the same operations.",
            "Putting the operation logic inside each UI element duplicates it and couples UI to business logic.",
        ],
        when_to_use: &[
            "When you want to parameterize objects with operations.",
            "When you want to queue, schedule or execute operations remotely.",
            "When you want to implement reversible operations.",
        ],
        implementation: CodeSample {
            title: "Text Editor with Undo",
            language: "typescript",
            code: "interface Command {
  execute(): void;
  undo(): void;
}

class Editor {
  text = '';
}

class AppendCommand implements Command {
  constructor(private editor: Editor, private value: string) {}

  execute() { this.editor.text += this.value; }

  undo() {
    this.editor.text = this.editor.text.slice(0, -this.value.length);
  }
}

class History {
  private stack: Command[] = [];

  run(command: Command) {
    command.execute();
    this.stack.push(command);
  }

  undo() { this.stack.pop()?.undo(); }
}",
        },
        examples: &[PatternExample {
            title: "Job Queues",
            description: "Serializable command objects are pushed onto a queue and executed by workers later.",
            sample: CodeSample {
                title: "SendEmailJob",
                language: "typescript",
                code: "class SendEmailJob implements Command {
  constructor(private to: string) {}

  execute() {
    console.log(`Sending email to ${this.to}`);
  }

  undo() {}
}

queue.push(new SendEmailJob('dev@example.com'));",
            },
        }],
        pros: &[
            "Single Responsibility Principle: invokers are decoupled from receivers.",
            "Open/Closed Principle: new commands don't break existing code.",
            "You can implement undo/redo and deferred execution.",
            "You can assemble simple commands into complex ones.",
        ],
        cons: &["The code may become more complicated since you're introducing a new layer between senders and receivers."],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_ids() {
        for id in PatternId::ALL {
            assert_eq!(pattern(id).id, id);
        }
    }

    #[test]
    fn test_three_patterns_per_category() {
        for category in Category::ALL {
            assert_eq!(by_category(category).count(), 3);
        }
    }
}
